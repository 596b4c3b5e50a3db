//! Language-specific abstractions.
//!
//! - [`TypeMapper`] - Trait for mapping column types to language types
//! - [`MappedType`] - A mapped type with its import and getter access
//! - [`NamingConvention`] - Language-specific naming rules

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{Access, Import, MappedType, TypeMapper};
