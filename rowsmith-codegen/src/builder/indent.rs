//! Indentation for generated code.

/// Width of one indentation level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// Four spaces, as rustfmt writes it.
    pub const RUST: Self = Self(4);

    /// Leading whitespace for a line nested `level` deep.
    pub fn prefix(&self, level: usize) -> String {
        " ".repeat(self.0 * level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(Indent::RUST.prefix(0), "");
        assert_eq!(Indent::RUST.prefix(2), " ".repeat(8));
    }
}
