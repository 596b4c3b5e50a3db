//! Core utilities for rowsmith.
//!
//! This crate provides the naming rules used to turn table and column
//! names into identifiers, and the file abstraction used to persist
//! generated sources.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{convert_name, singularize, to_screaming_snake_case, to_snake_case};

/// Header written at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by rowsmith. DO NOT EDIT.\n// Put hand-written code for this table in a *.custom.rs file.";
