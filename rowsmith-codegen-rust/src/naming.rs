//! Rust-specific naming conventions.

use rowsmith_codegen::language::NamingConvention;
use rowsmith_core::{convert_name, singularize, to_snake_case};

/// Keywords that cannot be used as raw identifiers.
const NOT_RAW: &[&str] = &["self", "Self", "crate", "super"];

fn escape_rust_reserved(name: &str) -> String {
    if NOT_RAW.contains(&name) {
        format!("{}_", name)
    } else {
        format!("r#{}", name)
    }
}

fn table_to_type(table: &str) -> String {
    convert_name(&singularize(table))
}

/// Rust naming conventions.
pub const RUST_NAMING: NamingConvention = NamingConvention {
    table_to_type,
    table_to_file: singularize,
    column_to_field: convert_name,
    field_to_ident: to_snake_case,
    reserved_words: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
    ],
    escape_reserved: escape_rust_reserved,
};

/// Getter name for a field, e.g. `CreatedAt` -> `get_created_at`.
///
/// The prefix makes every keyword usable, so the snake name is not escaped.
pub fn getter_name(field: &str) -> String {
    format!("get_{}", to_snake_case(field))
}
