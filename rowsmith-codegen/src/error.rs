use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for code generation (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("no results returned for table '{table}'")]
    #[diagnostic(
        code(rowsmith::no_columns),
        help("check that the table exists in the configured database and is visible to the user")
    )]
    NoColumns { table: String },

    #[error("unsupported type '{data_type}' for column '{column}' in table '{table}'")]
    #[diagnostic(code(rowsmith::unknown_type))]
    UnknownType {
        table: String,
        column: String,
        data_type: String,
    },

    #[error("columns '{first}' and '{second}' in table '{table}' both map to '{name}'")]
    #[diagnostic(
        code(rowsmith::duplicate_field),
        help("rename one of the columns or generate this table by hand")
    )]
    DuplicateField {
        table: String,
        name: String,
        first: String,
        second: String,
    },

    #[error("'{name}' in table '{table}' does not produce a valid identifier")]
    #[diagnostic(
        code(rowsmith::empty_identifier),
        help("names need at least one ASCII letter or digit")
    )]
    EmptyIdentifier { table: String, name: String },

    #[error("type name '{name}' of table '{table}' shadows a type used by column '{column}'")]
    #[diagnostic(
        code(rowsmith::type_name_collision),
        help("rename the table or generate this table by hand")
    )]
    TypeNameCollision {
        table: String,
        name: String,
        column: String,
    },

    #[error("generated source for '{file}' does not parse")]
    #[diagnostic(code(rowsmith::format))]
    Format {
        file: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}

impl Error {
    /// Create a format error pointing into the unformatted buffer
    pub fn format(
        file: impl Into<String>,
        src: impl Into<String>,
        span: Option<SourceSpan>,
        message: impl Into<String>,
    ) -> Box<Self> {
        let file = file.into();
        Box::new(Error::Format {
            src: NamedSource::new(&file, src.into()),
            file,
            span,
            message: message.into(),
        })
    }

    /// Name of the table the error belongs to, when known.
    pub fn table(&self) -> Option<&str> {
        match self {
            Error::NoColumns { table }
            | Error::UnknownType { table, .. }
            | Error::DuplicateField { table, .. }
            | Error::EmptyIdentifier { table, .. }
            | Error::TypeNameCollision { table, .. } => Some(table),
            Error::Format { .. } => None,
        }
    }
}
