use std::{collections::BTreeMap, path::Path, str::FromStr};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{ColumnDescriptor, Error, Result, SchemaReader};

/// Column metadata captured as JSON, usable offline in place of a server.
///
/// ```json
/// {
///   "database": "shop",
///   "tables": {
///     "users": [
///       { "name": "id", "data_type": "int", "column_type": "int(11)", "is_primary_key": true }
///     ]
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSchema {
    pub database: String,
    #[serde(default)]
    pub tables: BTreeMap<String, Vec<ColumnDescriptor>>,
}

impl SnapshotSchema {
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            tables: BTreeMap::new(),
        }
    }

    /// Add or replace a table.
    pub fn with_table(mut self, table: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        self.tables.insert(table.into(), columns);
        self
    }

    /// Load a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        content.parse()
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromStr for SnapshotSchema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

#[async_trait]
impl SchemaReader for SnapshotSchema {
    fn database(&self) -> &str {
        &self.database
    }

    async fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.tables
            .get(table)
            .cloned()
            .ok_or_else(|| Error::TableNotFound {
                table: table.to_string(),
                database: self.database.clone(),
            })
    }
}
