use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::{ColumnDescriptor, Error, MySqlConfig, Result, SchemaReader};

const COLUMNS_QUERY: &str = "SELECT \
    CAST(COLUMN_NAME AS CHAR) AS column_name, \
    CAST(COLUMN_DEFAULT AS CHAR) AS column_default, \
    CAST(IS_NULLABLE AS CHAR) AS is_nullable, \
    CAST(DATA_TYPE AS CHAR) AS data_type, \
    CAST(COLUMN_TYPE AS CHAR) AS column_type, \
    CAST(COLUMN_KEY AS CHAR) AS column_key, \
    CAST(EXTRA AS CHAR) AS extra \
    FROM information_schema.columns \
    WHERE TABLE_NAME = ? AND TABLE_SCHEMA = ? \
    ORDER BY ORDINAL_POSITION";

/// Reads column metadata from a live MySQL server.
#[derive(Debug, Clone)]
pub struct MySqlSchemaReader {
    pool: MySqlPool,
    database: String,
}

impl MySqlSchemaReader {
    /// Open a small connection pool for the configured database.
    ///
    /// The pool is created eagerly so an unreachable server is reported
    /// before any table is processed.
    pub async fn connect(config: &MySqlConfig) -> Result<Self> {
        let connect_error = |source| Error::Connect {
            url: config.redacted_url(),
            source,
        };
        let options = config.connect_options().map_err(connect_error)?;
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(connect_error)?;

        log::debug!("connected to {}", config.redacted_url());

        Ok(Self {
            pool,
            database: config.database.clone(),
        })
    }

    /// Close the pool, waiting for the connection to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SchemaReader for MySqlSchemaReader {
    fn database(&self) -> &str {
        &self.database
    }

    async fn columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows: Vec<ColumnRow> = sqlx::query_as(COLUMNS_QUERY)
            .bind(table)
            .bind(&self.database)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| Error::Query {
                table: table.to_string(),
                source,
            })?;

        log::debug!("table '{}': {} columns", table, rows.len());

        Ok(rows.into_iter().map(ColumnDescriptor::from).collect())
    }
}

/// One row of `information_schema.columns`
#[derive(Debug, FromRow)]
struct ColumnRow {
    column_name: String,
    column_default: Option<String>,
    is_nullable: Option<String>,
    data_type: String,
    column_type: String,
    column_key: Option<String>,
    extra: Option<String>,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        Self {
            name: row.column_name,
            default_value: row.column_default,
            nullable: row.is_nullable.as_deref() == Some("YES"),
            data_type: row.data_type,
            column_type: row.column_type,
            is_primary_key: row.column_key.as_deref() == Some("PRI"),
            extra: row.extra.unwrap_or_default(),
        }
    }
}
