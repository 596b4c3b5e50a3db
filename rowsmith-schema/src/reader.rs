use async_trait::async_trait;

use crate::{ColumnDescriptor, Result};

/// Source of column metadata.
///
/// Implementations must return columns in ordinal order. A table that
/// exists but has no visible columns yields an empty list rather than an
/// error; deciding what that means is up to the caller.
#[async_trait]
pub trait SchemaReader: Send + Sync {
    /// Name of the database (schema) the reader is bound to.
    fn database(&self) -> &str;

    /// Read the columns of `table`.
    async fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;
}
