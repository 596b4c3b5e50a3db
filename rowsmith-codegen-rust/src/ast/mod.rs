//! Rust AST builders for the items of a model file: structs, impls,
//! methods and consts.
//!
//! Each builder implements [`Renderable`](rowsmith_codegen::builder::Renderable)
//! and is emitted through a `CodeBuilder`.

mod consts;
mod fns;
mod impls;
mod structs;

pub use consts::Const;
pub use fns::Fn;
pub use impls::Impl;
pub use structs::{Field, Struct};

#[cfg(test)]
fn render(node: &impl rowsmith_codegen::builder::Renderable) -> String {
    let mut builder = rowsmith_codegen::builder::CodeBuilder::rust();
    builder.emit(node);
    builder.build()
}
