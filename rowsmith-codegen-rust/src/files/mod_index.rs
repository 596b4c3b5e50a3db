use std::{
    collections::{BTreeSet, HashSet},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use rowsmith_core::{
    File, FileRules, GENERATED_HEADER, GeneratedFile, WriteResult, convert_name, to_snake_case,
};

use super::table_file::TABLE_FILE_SUFFIX;
use crate::{RUST_NAMING, RawCode, RustFile, format_source};

/// The `mod.rs` index that mounts every `*.table.rs` file of a directory.
///
/// Table files are not valid module names on their own, so each one is
/// declared through a `#[path]` attribute and re-exported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModIndex {
    stems: BTreeSet<String>,
}

impl ModIndex {
    pub fn new(stems: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            stems: stems.into_iter().map(Into::into).collect(),
        }
    }

    /// Collect the table files present in `dir`.
    pub fn scan(dir: &Path) -> Result<Self> {
        let mut stems = BTreeSet::new();
        let entries = std::fs::read_dir(dir)
            .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;

        for entry in entries {
            let entry = entry.wrap_err("failed to read directory entry")?;
            if !entry.path().is_file() {
                continue;
            }
            let name = entry.file_name();
            if let Some(stem) = name.to_str().and_then(|n| n.strip_suffix(TABLE_FILE_SUFFIX))
                && !stem.is_empty()
            {
                stems.insert(stem.to_string());
            }
        }

        Ok(Self { stems })
    }

    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(String::as_str)
    }

    /// `(stem, module ident)` pairs in stem order.
    ///
    /// Stems go through the same cleanup as type names, so characters that
    /// cannot appear in an identifier are dropped. Stems that end up with
    /// the same ident get `_2`, `_3`, ... in stem order.
    fn modules(&self) -> Vec<(&str, String)> {
        let mut used = HashSet::new();
        self.stems
            .iter()
            .map(|stem| {
                let mut base = to_snake_case(&convert_name(stem));
                if base.is_empty() {
                    base = "table".to_string();
                }
                let mut ident = RUST_NAMING.safe_name(&base);
                let mut n = 2;
                while used.contains(&ident) {
                    ident = RUST_NAMING.safe_name(&format!("{}_{}", base, n));
                    n += 1;
                }
                used.insert(ident.clone());
                (stem.as_str(), ident)
            })
            .collect()
    }
}

impl GeneratedFile for ModIndex {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("mod.rs")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed()
    }

    fn render(&self) -> String {
        let modules = self.modules().into_iter().map(|(stem, ident)| {
            RawCode::lines([
                format!("#[path = {:?}]", format!("{}{}", stem, TABLE_FILE_SUFFIX)),
                format!("mod {};", ident),
                format!("pub use {}::*;", ident),
            ])
        });

        RustFile::new()
            .add_all(modules)
            .render_with_header(GENERATED_HEADER)
    }

    /// Validate the index like a table file before writing it.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let content = format_source("mod.rs", &self.render())?;
        File::new(self.path(base), content)
            .with_rules(self.rules())
            .write()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_render_sorted() {
        let index = ModIndex::new(["user", "order_item"]);
        let expected = format!(
            "{}\n\n{}",
            GENERATED_HEADER,
            "#[path = \"order_item.table.rs\"]\nmod order_item;\npub use order_item::*;\n\n\
             #[path = \"user.table.rs\"]\nmod user;\npub use user::*;\n"
        );
        assert_eq!(index.render(), expected);
    }

    #[test]
    fn test_render_escapes_module_names() {
        let index = ModIndex::new(["type", "team-person"]);
        let content = index.render();
        assert!(content.contains("mod r#type;\npub use r#type::*;"));
        assert!(content.contains("#[path = \"team-person.table.rs\"]\nmod team_person;"));
        assert!(syn::parse_file(&content).is_ok());
    }

    #[test]
    fn test_render_cleans_module_names() {
        let content = ModIndex::new(["user$", "self", "$$"]).render();
        assert!(content.contains("#[path = \"user$.table.rs\"]\nmod user;\npub use user::*;"));
        assert!(content.contains("mod self_;"));
        assert!(content.contains("#[path = \"$$.table.rs\"]\nmod table;"));
        assert!(syn::parse_file(&content).is_ok());
    }

    #[test]
    fn test_render_dedupes_module_names() {
        let index = ModIndex::new(["user_role", "UserRole", "user-role"]);
        let content = index.render();
        assert_eq!(
            index.modules(),
            [
                ("UserRole", "user_role".to_string()),
                ("user-role", "user_role_2".to_string()),
                ("user_role", "user_role_3".to_string()),
            ]
        );
        assert!(content.contains("#[path = \"UserRole.table.rs\"]\nmod user_role;"));
        assert!(content.contains("#[path = \"user_role.table.rs\"]\nmod user_role_3;"));
        assert!(syn::parse_file(&content).is_ok());
    }

    #[test]
    fn test_write_validates_and_normalizes() {
        let temp = TempDir::new().unwrap();
        let index = ModIndex::new(["user$", "user"]);

        assert_eq!(index.write(temp.path()).unwrap(), WriteResult::Written);
        let written = fs::read_to_string(temp.path().join("mod.rs")).unwrap();
        assert_eq!(written, index.render());
        assert!(written.contains("mod user;\npub use user::*;"));
        assert!(written.contains("mod user_2;\npub use user_2::*;"));
    }

    #[test]
    fn test_scan_only_table_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("user.table.rs"), "").unwrap();
        fs::write(temp.path().join("order.table.rs"), "").unwrap();
        fs::write(temp.path().join("user.custom.rs"), "").unwrap();
        fs::write(temp.path().join("mod.rs"), "").unwrap();
        fs::create_dir(temp.path().join("nested.table.rs")).unwrap();

        let index = ModIndex::scan(temp.path()).unwrap();
        assert_eq!(index.stems().collect::<Vec<_>>(), ["order", "user"]);
    }

    #[test]
    fn test_write_if_changed() {
        let temp = TempDir::new().unwrap();
        let index = ModIndex::new(["user"]);

        assert_eq!(index.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(index.write(temp.path()).unwrap(), WriteResult::Unchanged);
    }
}
