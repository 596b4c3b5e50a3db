//! Inspect command report data structures.

use rowsmith_schema::{ColumnDescriptor, SnapshotSchema};

use super::output::{Output, Report};

/// Columns of the inspected tables and their generated form.
#[derive(Debug)]
pub struct InspectReport {
    pub database: String,
    pub tables: Vec<InspectedTable>,
}

#[derive(Debug)]
pub struct InspectedTable {
    pub table: String,
    /// Name of the generated struct
    pub type_name: String,
    pub columns: Vec<InspectedColumn>,
}

#[derive(Debug)]
pub struct InspectedColumn {
    pub column: ColumnDescriptor,
    /// Struct field identifier
    pub field: String,
    /// `None` when the data type has no mapping
    pub rust_type: Option<&'static str>,
    pub annotation: String,
}

impl InspectReport {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            tables: Vec::new(),
        }
    }

    /// The raw columns, in the format read by `--schema-file`.
    pub fn snapshot(&self) -> SnapshotSchema {
        self.tables
            .iter()
            .fold(SnapshotSchema::new(&self.database), |schema, t| {
                let columns = t.columns.iter().map(|c| c.column.clone()).collect();
                schema.with_table(&t.table, columns)
            })
    }
}

impl Report for InspectReport {
    fn render(&self, out: &mut dyn Output) {
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.title(&format!("{}.{} -> {}", self.database, table.table, table.type_name));

            if table.columns.is_empty() {
                out.warning(&format!("table '{}' has no visible columns", table.table));
                continue;
            }

            let name_width = table.columns.iter().map(|c| c.column.name.len()).max().unwrap_or(0);
            let field_width = table.columns.iter().map(|c| c.field.len()).max().unwrap_or(0);
            for c in &table.columns {
                let ty = c.rust_type.unwrap_or("<unsupported>");
                out.list_item(&format!(
                    "{:<nw$}  {:<fw$}  {}  [{}]",
                    c.column.name,
                    c.field,
                    ty,
                    c.annotation,
                    nw = name_width,
                    fw = field_width,
                ));
            }

            let unsupported: Vec<_> = table
                .columns
                .iter()
                .filter(|c| c.rust_type.is_none())
                .map(|c| format!("{} ({})", c.column.name, c.column.data_type))
                .collect();
            if !unsupported.is_empty() {
                out.warning(&format!("unsupported column types: {}", unsupported.join(", ")));
            }
        }
    }
}
