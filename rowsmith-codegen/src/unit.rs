//! Language-neutral description of one table's generated source.

use indexmap::IndexMap;
use rowsmith_schema::ColumnDescriptor;

use crate::{
    Error, Result,
    generation::ImportCollector,
    language::{MappedType, NamingConvention, TypeMapper},
};

/// One struct field, derived from one column.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitField {
    /// PascalCase field name (e.g. `CreatedAt`)
    pub name: String,
    /// Identifier used for the struct member (e.g. `created_at`, `r#type`)
    pub ident: String,
    /// Original column name
    pub column: String,
    /// Mapped type
    pub ty: MappedType,
    /// Metadata annotation, e.g. `primary_key;auto_increment;type:int(11)`
    pub annotation: String,
}

/// Everything needed to render one table.
#[derive(Debug, Clone)]
pub struct GeneratedUnit {
    /// Package (module) the output belongs to
    pub package: String,
    /// Name of the generated type
    pub type_name: String,
    /// Original table name
    pub table_name: String,
    /// Output file stem (singular table name)
    pub file_stem: String,
    /// Fields in column order
    pub fields: Vec<UnitField>,
    /// Field name -> column name, in column order
    pub column_map: IndexMap<String, String>,
    /// Imports required by the field types
    pub imports: ImportCollector,
}

impl GeneratedUnit {
    /// Build the unit for `table` from its columns.
    ///
    /// Fails when the table has no columns, when a column type cannot be
    /// mapped, when two columns collapse to the same field, or when the type
    /// name would shadow a type that one of the fields refers to.
    pub fn build(
        package: &str,
        table: &str,
        columns: &[ColumnDescriptor],
        mapper: &impl TypeMapper,
        naming: &NamingConvention,
    ) -> Result<Self> {
        if columns.is_empty() {
            return Err(Box::new(Error::NoColumns {
                table: table.to_string(),
            }));
        }

        let type_name = naming.type_name(table);
        if type_name.is_empty() {
            return Err(empty_identifier(table, table));
        }

        let mut fields = Vec::with_capacity(columns.len());
        let mut column_map: IndexMap<String, String> = IndexMap::with_capacity(columns.len());
        let mut idents: IndexMap<String, String> = IndexMap::with_capacity(columns.len());
        let mut imports = ImportCollector::new();

        for column in columns {
            let name = naming.field_name(&column.name);
            if name.is_empty() {
                return Err(empty_identifier(table, &column.name));
            }

            let ty = mapper
                .map_type(&column.data_type, column.nullable)
                .ok_or_else(|| {
                    Box::new(Error::UnknownType {
                        table: table.to_string(),
                        column: column.name.clone(),
                        data_type: column.data_type.clone(),
                    })
                })?;

            if let Some(first) = column_map.get(&name) {
                return Err(duplicate(table, &name, first, &column.name));
            }
            let ident = naming.ident(&name);
            if let Some(first) = idents.get(&ident) {
                return Err(duplicate(table, &ident, first, &column.name));
            }

            if let Some(import) = ty.import {
                imports.add(import.module, import.symbol);
            }

            column_map.insert(name.clone(), column.name.clone());
            idents.insert(ident.clone(), column.name.clone());
            fields.push(UnitField {
                name,
                ident,
                column: column.name.clone(),
                ty,
                annotation: annotation(column),
            });
        }

        if let Some(field) = fields
            .iter()
            .find(|field| type_names(field.ty.ty).any(|name| name == type_name))
        {
            return Err(Box::new(Error::TypeNameCollision {
                table: table.to_string(),
                name: type_name,
                column: field.column.clone(),
            }));
        }

        Ok(Self {
            package: package.to_string(),
            type_name,
            table_name: table.to_string(),
            file_stem: naming.file_name(table),
            fields,
            column_map,
            imports,
        })
    }
}

/// Build the metadata annotation of a column.
///
/// Parts are joined with `;` in a fixed order: `primary_key`, the extra
/// attributes verbatim, `type:<column type>` and `default:<value>`.
pub fn annotation(column: &ColumnDescriptor) -> String {
    let mut parts = Vec::with_capacity(4);
    if column.is_primary_key {
        parts.push("primary_key".to_string());
    }
    if !column.extra.is_empty() {
        parts.push(column.extra.clone());
    }
    parts.push(format!("type:{}", column.column_type));
    if let Some(default) = column.non_empty_default() {
        parts.push(format!("default:{}", default));
    }
    parts.join(";")
}

/// Identifiers mentioned in a type, e.g. `Option<NaiveDate>` -> `Option`, `NaiveDate`.
fn type_names(ty: &str) -> impl Iterator<Item = &str> {
    ty.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|name| !name.is_empty())
}

fn empty_identifier(table: &str, name: &str) -> Box<Error> {
    Box::new(Error::EmptyIdentifier {
        table: table.to_string(),
        name: name.to_string(),
    })
}

fn duplicate(table: &str, name: &str, first: &str, second: &str) -> Box<Error> {
    Box::new(Error::DuplicateField {
        table: table.to_string(),
        name: name.to_string(),
        first: first.to_string(),
        second: second.to_string(),
    })
}
