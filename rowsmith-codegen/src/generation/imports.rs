//! Import collection for generated files.

use std::collections::{BTreeMap, BTreeSet};

/// Tracks imports and deduplicates them.
///
/// Modules and symbols are both kept sorted so that the rendered `use`
/// lines do not depend on column order.
///
/// # Example
///
/// ```
/// use rowsmith_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("chrono", "NaiveDateTime");
/// imports.add("chrono", "NaiveDate");
/// imports.add("chrono", "NaiveDate");
///
/// let symbols: Vec<_> = imports.symbols().collect();
/// assert_eq!(symbols, [("chrono", "NaiveDate"), ("chrono", "NaiveDateTime")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportCollector {
    /// Module path -> set of symbols
    imports: BTreeMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Iterate over every `(module, symbol)` pair in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, &str)> {
        self.imports.iter().flat_map(|(module, symbols)| {
            symbols
                .iter()
                .map(move |symbol| (module.as_str(), symbol.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_dedup() {
        let mut imports = ImportCollector::new();
        imports.add("chrono", "NaiveDate");
        imports.add("chrono", "NaiveDate");

        assert_eq!(imports.symbols().collect::<Vec<_>>(), [("chrono", "NaiveDate")]);
    }

    #[test]
    fn test_import_collector_sorted() {
        let mut imports = ImportCollector::new();
        imports.add("std::collections", "HashMap");
        imports.add("chrono", "NaiveTime");
        imports.add("chrono", "NaiveDate");

        let symbols: Vec<_> = imports.symbols().collect();
        assert_eq!(
            symbols,
            [
                ("chrono", "NaiveDate"),
                ("chrono", "NaiveTime"),
                ("std::collections", "HashMap"),
            ]
        );
    }
}
