//! Rust const item builder.

use rowsmith_codegen::builder::{CodeFragment, Renderable};

/// Builder for a public `const` initialised with a struct literal of its
/// own type, one field per line.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    ty: String,
    fields: Vec<(String, String)>,
}

impl Const {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field to the struct literal.
    pub fn field(mut self, name: impl Into<String>, expr: impl Into<String>) -> Self {
        self.fields.push((name.into(), expr.into()));
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("pub const {}: {} = {} {{", self.name, self.ty, self.ty),
            self.fields
                .iter()
                .map(|(name, expr)| CodeFragment::Line(format!("{}: {},", name, expr)))
                .collect(),
            "};",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_struct_literal_const() {
        let c = Const::new("USER_COLUMNS", "UserColumns")
            .field("id", "\"id\"")
            .field("r#type", "\"type\"");
        assert_eq!(
            render(&c),
            "pub const USER_COLUMNS: UserColumns = UserColumns {\n    id: \"id\",\n    r#type: \"type\",\n};\n"
        );
    }
}
