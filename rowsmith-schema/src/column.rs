use serde::{Deserialize, Serialize};

/// One column of a table, as reported by the schema catalog.
///
/// Descriptors are produced in ordinal order and that order is kept all the
/// way through to the generated struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name as declared in the table.
    pub name: String,
    /// Declared default, verbatim (`CURRENT_TIMESTAMP`, `0`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Whether the column accepts NULL.
    #[serde(default)]
    pub nullable: bool,
    /// Bare data type, e.g. `varchar`.
    pub data_type: String,
    /// Full column type, e.g. `varchar(255)` or `int(10) unsigned`.
    pub column_type: String,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub is_primary_key: bool,
    /// Extra attributes such as `auto_increment`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra: String,
}

impl ColumnDescriptor {
    /// Create a non-null column without key, default or extra attributes.
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        column_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            nullable: false,
            data_type: data_type.into(),
            column_type: column_type.into(),
            is_primary_key: false,
            extra: String::new(),
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// The default value, treating an empty declaration as absent.
    pub fn non_empty_default(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let col = ColumnDescriptor::new("id", "int", "int(11)")
            .primary_key()
            .extra("auto_increment");

        assert_eq!(col.name, "id");
        assert!(col.is_primary_key);
        assert!(!col.nullable);
        assert_eq!(col.extra, "auto_increment");
        assert_eq!(col.default_value, None);
    }

    #[test]
    fn test_non_empty_default() {
        let empty = ColumnDescriptor::new("name", "varchar", "varchar(50)").default_value("");
        assert_eq!(empty.non_empty_default(), None);

        let zero = ColumnDescriptor::new("count", "int", "int(11)").default_value("0");
        assert_eq!(zero.non_empty_default(), Some("0"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let col: ColumnDescriptor = serde_json::from_str(
            r#"{"name": "email", "data_type": "varchar", "column_type": "varchar(255)"}"#,
        )
        .unwrap();

        assert_eq!(col, ColumnDescriptor::new("email", "varchar", "varchar(255)"));
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let json = serde_json::to_string(&ColumnDescriptor::new("id", "int", "int(11)")).unwrap();
        assert!(!json.contains("default_value"));
        assert!(!json.contains("extra"));
    }
}
