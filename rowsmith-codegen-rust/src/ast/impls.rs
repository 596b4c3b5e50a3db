//! Rust impl block builder.

use rowsmith_codegen::builder::{CodeFragment, Renderable};

use super::Fn;

/// Builder for inherent impl blocks.
#[derive(Debug, Clone)]
pub struct Impl {
    type_name: String,
    methods: Vec<Fn>,
}

impl Impl {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            methods: Vec::new(),
        }
    }

    pub fn method(mut self, method: Fn) -> Self {
        self.methods.push(method);
        self
    }

    pub fn methods(mut self, methods: impl IntoIterator<Item = Fn>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Methods separated by blank lines.
    fn methods_to_fragments(&self) -> Vec<CodeFragment> {
        self.methods
            .iter()
            .enumerate()
            .flat_map(|(i, method)| {
                let mut fragments = Vec::new();
                if i > 0 {
                    fragments.push(CodeFragment::Blank);
                }
                fragments.extend(method.to_fragments());
                fragments
            })
            .collect()
    }
}

impl Renderable for Impl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::braced(
            format!("impl {} {{", self.type_name),
            self.methods_to_fragments(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::render;

    #[test]
    fn test_empty_impl() {
        assert_eq!(render(&Impl::new("User")), "impl User {\n}\n");
    }

    #[test]
    fn test_impl_with_methods() {
        let i = Impl::new("User")
            .method(Fn::new("get_id").self_ref().returns("i32").body_line("self.id"))
            .method(
                Fn::new("get_email")
                    .self_ref()
                    .returns("&str")
                    .body_line("&self.email"),
            );
        assert_eq!(
            render(&i),
            "impl User {\n    pub fn get_id(&self) -> i32 {\n        self.id\n    }\n\n    pub fn get_email(&self) -> &str {\n        &self.email\n    }\n}\n"
        );
    }
}
