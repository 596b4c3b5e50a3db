//! Code fragments produced by AST nodes.
//!
//! Nodes describe themselves as fragments; [`CodeBuilder`](super::CodeBuilder)
//! turns fragments into indented text.

/// A fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line (newline appended).
    Line(String),
    /// An empty line.
    Blank,
    /// A header line, an indented body and a closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: impl Into<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close: close.into(),
        }
    }

    /// A block closed by `}`.
    pub fn braced(header: impl Into<String>, body: Vec<CodeFragment>) -> Self {
        Self::block(header, body, "}")
    }
}

/// Types that can be rendered to code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}
