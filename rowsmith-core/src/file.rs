use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render())
            .with_rules(self.rules())
            .write()
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was left alone because its content did not change
    Unchanged,
}

/// A file to be generated
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        match self.rules.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => {
                let current = std::fs::read_to_string(&self.path).ok();
                if current.as_deref() == Some(self.content.as_str()) {
                    Ok(WriteResult::Unchanged)
                } else {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            }
        }
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    pub overwrite: Overwrite,
}

impl FileRules {
    /// Truncate and rewrite the file on every run.
    pub fn always_overwrite() -> Self {
        Self {
            overwrite: Overwrite::Always,
        }
    }

    /// Skip the write when the file already holds the same content.
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always truncate and rewrite (table sources)
    #[default]
    Always,
    /// Rewrite only when the content differs (module index)
    IfChanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model").join("nested").join("user.table.rs");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_truncates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user.table.rs");

        fs::write(&path, "a much longer original content").unwrap();

        let file = File::new(&path, "short");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mod.rs");

        fs::write(&path, "same").unwrap();

        let file = File::new(&path, "same").with_rules(FileRules::if_changed());
        assert_eq!(file.write().unwrap(), WriteResult::Unchanged);

        let file = File::new(&path, "different").with_rules(FileRules::if_changed());
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "different");
    }

    #[test]
    fn test_file_exists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        let file = File::new(&path, "content");
        assert!(!file.exists());

        fs::write(&path, "content").unwrap();
        assert!(file.exists());
    }

    #[test]
    fn test_generated_file_write() {
        struct Greeting;

        impl GeneratedFile for Greeting {
            fn path(&self, base: &Path) -> PathBuf {
                base.join("greeting.rs")
            }

            fn render(&self) -> String {
                "pub const HELLO: &str = \"hello\";\n".to_string()
            }
        }

        let temp = TempDir::new().unwrap();
        Greeting.write(temp.path()).unwrap();

        assert_eq!(
            fs::read_to_string(temp.path().join("greeting.rs")).unwrap(),
            "pub const HELLO: &str = \"hello\";\n"
        );
    }
}
