//! Schema metadata for rowsmith.
//!
//! A [`SchemaReader`] turns a table name into the ordered list of
//! [`ColumnDescriptor`]s the generators work from. Two readers ship with
//! the crate:
//!
//! - [`MySqlSchemaReader`] - queries `information_schema.columns` on a live server
//! - [`SnapshotSchema`] - serves columns from a JSON snapshot, for offline runs and tests

mod column;
mod config;
mod error;
mod mysql;
mod reader;
mod snapshot;

pub use column::ColumnDescriptor;
pub use config::MySqlConfig;
pub use error::{Error, Result};
pub use mysql::MySqlSchemaReader;
pub use reader::SchemaReader;
pub use snapshot::SnapshotSchema;
