//! Indented text assembly.

use super::{CodeFragment, Indent, Renderable};

/// Writes lines at the current indentation level.
///
/// ```
/// use rowsmith_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::rust();
/// builder
///     .push_inner_doc("Model for table `users`")
///     .push_blank()
///     .push_line("pub struct User;");
/// assert_eq!(builder.build(), "//! Model for table `users`\n\npub struct User;\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Builder with rustfmt's indentation.
    pub fn rust() -> Self {
        Self::new(Indent::RUST)
    }

    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(&self.indent.prefix(self.level));
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a `//!` line; an empty `text` gives a bare `//!`.
    pub fn push_inner_doc(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            self.push_line("//!")
        } else {
            self.push_line(&format!("//! {}", text))
        }
    }

    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(&fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.level += 1;
                for f in body {
                    self.apply_fragment(f);
                }
                self.level -= 1;
                self.push_line(close);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ImplNode;

    impl Renderable for ImplNode {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::braced(
                "impl User {",
                vec![
                    CodeFragment::braced(
                        "pub fn get_id(&self) -> i32 {",
                        vec![CodeFragment::line("self.id")],
                    ),
                    CodeFragment::Blank,
                    CodeFragment::block("const X: A = A {", vec![], "};"),
                ],
            )]
        }
    }

    #[test]
    fn test_emit_nested_blocks() {
        let mut builder = CodeBuilder::rust();
        builder.emit(&ImplNode);
        assert_eq!(
            builder.build(),
            "impl User {\n    pub fn get_id(&self) -> i32 {\n        self.id\n    }\n\n    const X: A = A {\n    };\n}\n"
        );
    }

    #[test]
    fn test_inner_doc() {
        let mut builder = CodeBuilder::rust();
        builder.push_inner_doc("").push_inner_doc("Table `users`");
        assert_eq!(builder.build(), "//!\n//! Table `users`\n");
    }
}
