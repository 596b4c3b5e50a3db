//! Rust code generator for rowsmith.
//!
//! Turns the columns of a table into a Rust source file: a model struct with
//! per-field metadata, a table-name accessor, a column-name table and one
//! getter per field. Output is validated with `syn` before it is handed back.

mod format;
mod generator;
mod naming;
mod renderer;
mod rust_file;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Const, Field, Fn, Impl, Struct};
pub use format::format_source;
pub use generator::Generator;
pub use naming::{RUST_NAMING, getter_name};
pub use renderer::render_unit;
pub use rust_file::{RawCode, RustFile, Use};
pub use type_mapper::RustTypeMapper;
