//! Inspect operation: read columns and show how they would be generated.

use rowsmith_codegen::{annotation, language::TypeMapper};
use rowsmith_codegen_rust::{RUST_NAMING, RustTypeMapper};
use rowsmith_schema::{Result, SchemaReader};

use crate::reports::{InspectReport, InspectedColumn, InspectedTable};

/// Read `tables` and pair every column with its field and Rust type.
///
/// Columns whose type has no mapping are kept, with no type, so they can be
/// spotted before running `generate`.
pub async fn inspect(reader: &dyn SchemaReader, tables: &[String]) -> Result<InspectReport> {
    let mapper = RustTypeMapper;
    let mut report = InspectReport::new(reader.database());

    for table in tables {
        let columns = reader.columns(table).await?;
        let columns = columns
            .into_iter()
            .map(|column| InspectedColumn {
                field: RUST_NAMING.ident(&RUST_NAMING.field_name(&column.name)),
                rust_type: mapper
                    .map_type(&column.data_type, column.nullable)
                    .map(|mapped| mapped.ty),
                annotation: annotation(&column),
                column,
            })
            .collect();

        report.tables.push(InspectedTable {
            table: table.clone(),
            type_name: RUST_NAMING.type_name(table),
            columns,
        });
    }

    Ok(report)
}
