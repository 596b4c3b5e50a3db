//! Naming conventions for target languages.

/// Language-specific naming conventions.
///
/// Defines how table and column names become type, file and field names,
/// and how reserved words are handled.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a table name to a type name (e.g., "user_roles" -> "UserRole")
    pub table_to_type: fn(&str) -> String,
    /// Transform a table name to a file stem (e.g., "user_roles" -> "user_role")
    pub table_to_file: fn(&str) -> String,
    /// Transform a column name to a field name (e.g., "created_at" -> "CreatedAt")
    pub column_to_field: fn(&str) -> String,
    /// Transform a field name to a member identifier (e.g., "CreatedAt" -> "created_at")
    pub field_to_ident: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "type" -> "r#type" in Rust)
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    ///
    /// Names starting with a digit get a leading underscore.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else if name.starts_with(|c: char| c.is_ascii_digit()) {
            format!("_{}", name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name.
    pub fn type_name(&self, table: &str) -> String {
        let transformed = (self.table_to_type)(table);
        self.safe_name(&transformed)
    }

    /// Transform a table name into a file stem. File names are not escaped.
    pub fn file_name(&self, table: &str) -> String {
        (self.table_to_file)(table)
    }

    /// Transform a column name into a field name (unescaped).
    pub fn field_name(&self, column: &str) -> String {
        (self.column_to_field)(column)
    }

    /// Transform a field name and make it safe for use as an identifier.
    pub fn ident(&self, field: &str) -> String {
        let transformed = (self.field_to_ident)(field);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn lower(s: &str) -> String {
        s.to_lowercase()
    }

    fn suffix(s: &str) -> String {
        format!("{}_", s)
    }

    const TEST: NamingConvention = NamingConvention {
        table_to_type: upper,
        table_to_file: lower,
        column_to_field: upper,
        field_to_ident: lower,
        reserved_words: &["type", "FN"],
        escape_reserved: suffix,
    };

    #[test]
    fn test_safe_name() {
        assert_eq!(TEST.safe_name("type"), "type_");
        assert_eq!(TEST.safe_name("name"), "name");
        assert_eq!(TEST.safe_name("2fa"), "_2fa");
    }

    #[test]
    fn test_transforms() {
        assert_eq!(TEST.type_name("fn"), "FN_");
        assert_eq!(TEST.file_name("Users"), "users");
        assert_eq!(TEST.field_name("type"), "TYPE");
        assert_eq!(TEST.ident("TYPE"), "type_");
    }
}
