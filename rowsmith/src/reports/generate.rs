//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation batch.
#[derive(Debug)]
pub struct GenerateReport {
    /// Database the columns were read from.
    pub database: String,
    /// Whether files were rendered without being written.
    pub dry_run: bool,
    /// One entry per requested table, in request order.
    pub tables: Vec<TableResult>,
    /// Module index refresh, when any file was written.
    pub index: Option<IndexResult>,
}

/// Outcome for a single table.
#[derive(Debug)]
pub struct TableResult {
    pub table: String,
    pub outcome: TableOutcome,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TableOutcome {
    /// File written to disk.
    Written(PathBuf),
    /// Dry-run: the file that would have been written.
    Preview { path: PathBuf, content: String },
    /// Reading, generating or writing failed.
    Failed(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum IndexResult {
    Written(PathBuf),
    Unchanged(PathBuf),
    Failed(String),
}

impl GenerateReport {
    pub fn new(database: impl Into<String>, dry_run: bool) -> Self {
        Self {
            database: database.into(),
            dry_run,
            tables: Vec::new(),
            index: None,
        }
    }

    pub fn push(&mut self, table: impl Into<String>, outcome: TableOutcome) {
        self.tables.push(TableResult {
            table: table.into(),
            outcome,
        });
    }

    /// Number of files written to disk.
    pub fn written(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| matches!(t.outcome, TableOutcome::Written(_)))
            .count()
    }

    /// Failed tables with their error message.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tables.iter().filter_map(|t| match &t.outcome {
            TableOutcome::Failed(err) => Some((t.table.as_str(), err.as_str())),
            _ => None,
        })
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }

        let failures: Vec<_> = self.failures().collect();
        if !failures.is_empty() {
            out.newline();
            out.section(&format!("Failed ({})", failures.len()));
            for (table, err) in &failures {
                out.removed_item(&format!("{}: {}", table, err));
            }
        }

        out.newline();
        out.key_value(
            "Tables",
            &format!(
                "{} generated, {} failed (schema '{}')",
                self.tables.len() - failures.len(),
                failures.len(),
                self.database
            ),
        );
    }
}

impl GenerateReport {
    fn render_preview(&self, out: &mut dyn Output) {
        for result in &self.tables {
            if let TableOutcome::Preview { path, content } = &result.outcome {
                out.divider(&path.display().to_string());
                out.preformatted(content);
            }
        }
    }

    fn render_written(&self, out: &mut dyn Output) {
        out.section(&format!("Generated ({})", self.written()));
        for result in &self.tables {
            if let TableOutcome::Written(path) = &result.outcome {
                out.added_item(&path.display().to_string());
            }
        }

        match &self.index {
            Some(IndexResult::Written(path)) => out.added_item(&path.display().to_string()),
            Some(IndexResult::Unchanged(path)) => {
                out.list_item(&format!("{} (unchanged)", path.display()))
            }
            Some(IndexResult::Failed(err)) => {
                out.warning(&format!("module index not updated: {}", err))
            }
            None => {}
        }
    }
}
