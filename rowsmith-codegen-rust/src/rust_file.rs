//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with a module doc,
//! organized imports and body content.

use rowsmith_codegen::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::ImportCollector,
};

/// A single-symbol `use` line.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbol: String,
}

impl Use {
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }

    /// One `use` line per symbol, sorted by module then symbol.
    pub fn from_imports(imports: &ImportCollector) -> Vec<Self> {
        imports
            .symbols()
            .map(|(module, symbol)| Use::new(module, symbol))
            .collect()
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "use {}::{};",
            self.module, self.symbol
        ))]
    }
}

/// A structured representation of a Rust file.
///
/// Sections are separated by single blank lines: module docs, then use
/// statements, then body items.
///
/// # Example
///
/// ```
/// use rowsmith_codegen_rust::{RawCode, RustFile, Use};
///
/// let code = RustFile::new()
///     .inner_doc("Model for table `users`.")
///     .use_stmts([Use::new("chrono", "NaiveDate")])
///     .add(RawCode::lines(["pub struct User;"]))
///     .render();
///
/// assert_eq!(
///     code,
///     "//! Model for table `users`.\n\nuse chrono::NaiveDate;\n\npub struct User;\n"
/// );
/// ```
#[derive(Default)]
pub struct RustFile {
    inner_docs: Vec<String>,
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `//!` line to the module documentation.
    pub fn inner_doc(mut self, line: impl Into<String>) -> Self {
        self.inner_docs.push(line.into());
        self
    }

    pub fn use_stmts(mut self, uses: impl IntoIterator<Item = Use>) -> Self {
        self.uses.extend(uses);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        let mut builder = CodeBuilder::rust();
        let mut sections = 0;

        if !self.inner_docs.is_empty() {
            for line in &self.inner_docs {
                builder.push_inner_doc(line);
            }
            sections += 1;
        }

        if !self.uses.is_empty() {
            if sections > 0 {
                builder.push_blank();
            }
            for use_stmt in &self.uses {
                builder.emit(use_stmt);
            }
            sections += 1;
        }

        for fragments in &self.body {
            if sections > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
            sections += 1;
        }

        builder.build()
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }
}

/// Raw lines of code, one body section per value.
#[derive(Debug, Clone)]
pub struct RawCode(Vec<String>);

impl RawCode {
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(lines.into_iter().map(Into::into).collect())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0.iter().cloned().map(CodeFragment::Line).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_with_header() {
        assert_eq!(RustFile::new().render(), "");
        assert_eq!(RustFile::new().render_with_header("// header"), "// header\n");
    }

    #[test]
    fn test_uses_from_imports_are_sorted() {
        let mut imports = ImportCollector::new();
        imports.add("chrono", "NaiveTime");
        imports.add("chrono", "NaiveDate");

        let code = RustFile::new()
            .use_stmts(Use::from_imports(&imports))
            .render();
        assert_eq!(code, "use chrono::NaiveDate;\nuse chrono::NaiveTime;\n");
    }

    #[test]
    fn test_blank_lines_between_sections() {
        let file = RustFile::new()
            .inner_doc("Models")
            .add_all([RawCode::lines(["struct Foo;"]), RawCode::lines(["struct Bar;"])]);

        assert_eq!(file.render(), "//! Models\n\nstruct Foo;\n\nstruct Bar;\n");
    }

    #[test]
    fn test_render_with_header() {
        let file = RustFile::new()
            .use_stmts([Use::new("chrono", "NaiveDate")])
            .add(RawCode::lines(["pub struct A;", "pub struct B;"]));

        let code = file.render_with_header("// Generated");
        assert_eq!(
            code,
            "// Generated\n\nuse chrono::NaiveDate;\n\npub struct A;\npub struct B;\n"
        );
    }
}
