//! Core operations.
//!
//! This module contains the business logic for rowsmith commands,
//! separated from CLI argument parsing and output rendering.

pub mod generate;
pub mod inspect;

pub use generate::{GenerateOptions, generate_all};
pub use inspect::inspect;
