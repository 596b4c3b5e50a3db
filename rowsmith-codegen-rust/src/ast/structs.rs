//! Rust struct builder.

use rowsmith_codegen::builder::{CodeFragment, Renderable};

/// A public field in a Rust struct.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub attrs: Vec<String>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            attrs: Vec::new(),
        }
    }

    /// Attach a `#[doc = "..."]` attribute, escaping `text` as a string literal.
    pub fn doc_attr(mut self, text: &str) -> Self {
        self.attrs.push(format!("doc = {:?}", text));
        self
    }

    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .attrs
            .iter()
            .map(|attr| CodeFragment::Line(format!("#[{}]", attr)))
            .collect();
        fragments.push(CodeFragment::Line(format!("pub {}: {},", self.name, self.ty)));
        fragments
    }
}

/// Builder for public Rust structs with named fields.
#[derive(Debug, Clone)]
pub struct Struct {
    name: String,
    derives: Vec<String>,
    fields: Vec<Field>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            derives: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn derives(mut self, derives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.derives.extend(derives.into_iter().map(Into::into));
        self
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }
}

impl Renderable for Struct {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if !self.derives.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "#[derive({})]",
                self.derives.join(", ")
            )));
        }
        fragments.push(CodeFragment::braced(
            format!("pub struct {} {{", self.name),
            self.fields.iter().flat_map(Field::to_fragments).collect(),
        ));

        fragments
    }
}
