//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - writes indented lines
//! - [`CodeFragment`] - lines and blocks produced by AST nodes
//! - [`Renderable`] - trait for nodes that produce fragments
//! - [`Indent`] - indentation width

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
