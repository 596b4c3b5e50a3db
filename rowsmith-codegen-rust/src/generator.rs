use rowsmith_codegen::{GeneratedUnit, Result, language::TypeMapper};
use rowsmith_schema::ColumnDescriptor;

use crate::{RUST_NAMING, RustTypeMapper, files::TableFile, format::format_source, render_unit};

/// Generates one Rust source file per table.
#[derive(Debug, Clone)]
pub struct Generator {
    package: String,
    mapper: RustTypeMapper,
}

impl Generator {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            mapper: RustTypeMapper,
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn language(&self) -> &'static str {
        self.mapper.language()
    }

    /// Build the unit for a table without rendering it.
    pub fn unit(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<GeneratedUnit> {
        GeneratedUnit::build(&self.package, table, columns, &self.mapper, &RUST_NAMING)
    }

    /// Render and validate the source file for a table.
    ///
    /// Nothing touches the filesystem; the returned file is written by the
    /// caller.
    pub fn generate(&self, table: &str, columns: &[ColumnDescriptor]) -> Result<TableFile> {
        let unit = self.unit(table, columns)?;
        let file_name = TableFile::file_name(&unit.file_stem);
        let content = format_source(&file_name, &render_unit(&unit))?;

        Ok(TableFile::new(unit.table_name, unit.file_stem, content))
    }
}
