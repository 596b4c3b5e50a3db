//! Shared code generation utilities for rowsmith.
//!
//! This crate holds the language-agnostic half of the generator: the
//! building blocks used to emit indented source, the [`TypeMapper`] seam,
//! and [`GeneratedUnit`], the description of one table that a
//! language-specific renderer (e.g. `rowsmith-codegen-rust`) turns into a file.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output helpers (ImportCollector)
//! - [`language`] - Language-specific abstractions (TypeMapper, NamingConvention)
//!
//! [`TypeMapper`]: language::TypeMapper

pub mod builder;
mod error;
pub mod generation;
pub mod language;
mod unit;

pub use error::{Error, Result};
pub use unit::{GeneratedUnit, UnitField, annotation};
