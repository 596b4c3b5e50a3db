//! Language-agnostic code generation traits.

/// An import required by a mapped type, e.g. `chrono::NaiveDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Import {
    pub module: &'static str,
    pub symbol: &'static str,
}

impl Import {
    pub const fn new(module: &'static str, symbol: &'static str) -> Self {
        Self { module, symbol }
    }
}

/// How a getter hands out a field of a given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The type is `Copy` and is returned by value.
    ByValue,
    /// An owned string, borrowed as a string slice.
    Str,
    /// An optional owned string, borrowed as an optional string slice.
    OptionalStr,
    /// An owned byte buffer, borrowed as a byte slice.
    Bytes,
}

/// Result of mapping a column's data type to a target language type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedType {
    /// Type as written in the struct definition
    pub ty: &'static str,
    /// Import the type needs, if any
    pub import: Option<Import>,
    /// How getters return the value
    pub access: Access,
}

impl MappedType {
    pub const fn new(ty: &'static str, access: Access) -> Self {
        Self {
            ty,
            import: None,
            access,
        }
    }

    pub const fn with_import(mut self, module: &'static str, symbol: &'static str) -> Self {
        self.import = Some(Import::new(module, symbol));
        self
    }
}

/// Trait for mapping database column types to language-specific types.
///
/// Implementations must be pure: the same input always gives the same
/// output, and nothing is recorded as a side effect.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a raw data type (e.g. `varchar`) to a type, or `None` when the
    /// data type is not supported.
    fn map_type(&self, data_type: &str, nullable: bool) -> Option<MappedType>;
}
