use std::path::{Path, PathBuf};

use rowsmith_core::{FileRules, GeneratedFile};

/// Suffix of every generated table source.
pub const TABLE_FILE_SUFFIX: &str = ".table.rs";

/// The rendered source of one table, `<out>/<singular table>.table.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFile {
    table: String,
    stem: String,
    content: String,
}

impl TableFile {
    pub fn new(table: impl Into<String>, stem: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            stem: stem.into(),
            content: content.into(),
        }
    }

    /// File name for a stem, e.g. `user` -> `user.table.rs`.
    pub fn file_name(stem: &str) -> String {
        format!("{}{}", stem, TABLE_FILE_SUFFIX)
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for TableFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(Self::file_name(&self.stem))
    }

    fn rules(&self) -> FileRules {
        FileRules::always_overwrite()
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
