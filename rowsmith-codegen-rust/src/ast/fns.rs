//! Rust method builder.

use rowsmith_codegen::builder::{CodeFragment, Renderable};

/// Builder for public functions and methods.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    self_ref: bool,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            self_ref: false,
            return_type: None,
            body: Vec::new(),
        }
    }

    /// Take `&self` as the receiver.
    pub fn self_ref(mut self) -> Self {
        self.self_ref = true;
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    fn signature(&self) -> String {
        let receiver = if self.self_ref { "&self" } else { "" };
        match &self.return_type {
            Some(ret) => format!("pub fn {}({}) -> {} {{", self.name, receiver, ret),
            None => format!("pub fn {}({}) {{", self.name, receiver),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            self.signature(),
            self.body.iter().cloned().map(CodeFragment::Line).collect(),
        )]
    }
}
