use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema reading
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to connect to {url}")]
    #[diagnostic(
        code(rowsmith::connect),
        help("check the [mysql] section of rowsmith.toml or the ROWSMITH__MYSQL__* variables")
    )]
    Connect {
        /// Connection URL with the password masked
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to read columns of table '{table}'")]
    #[diagnostic(code(rowsmith::query))]
    Query {
        table: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("failed to read schema snapshot '{path}'")]
    #[diagnostic(code(rowsmith::snapshot))]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid schema snapshot")]
    #[diagnostic(
        code(rowsmith::snapshot),
        help("produce a snapshot with 'rowsmith inspect <table> --json'")
    )]
    SnapshotParse(#[from] serde_json::Error),

    #[error("table '{table}' not found in schema '{database}'")]
    #[diagnostic(code(rowsmith::table_not_found))]
    TableNotFound { table: String, database: String },
}
