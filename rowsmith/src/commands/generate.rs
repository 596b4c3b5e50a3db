use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::Source;
use crate::{
    config::Settings,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Output directory
    #[arg(short, long, default_value = "./model/")]
    out: PathBuf,

    /// Module name recorded in the generated files
    #[arg(short, long, default_value = "model")]
    package: String,

    /// Comma-separated table names
    #[arg(short, long, value_delimiter = ',', value_name = "TABLES")]
    tables: Vec<String>,

    /// Table names
    #[arg(value_name = "TABLE")]
    table_args: Vec<String>,

    /// Print the generated files instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Read columns from a JSON snapshot instead of the server
    #[arg(long, value_name = "FILE")]
    schema_file: Option<PathBuf>,
}

impl GenerateCommand {
    pub async fn run(&self, settings: &Settings) -> Result<()> {
        let tables = self.table_names();
        if tables.is_empty() {
            log::warn!("no tables given, nothing to generate");
            return Ok(());
        }

        let source = Source::open(self.schema_file.as_ref(), &settings.mysql).await;
        let options = GenerateOptions {
            out_dir: &self.out,
            package: &self.package,
            dry_run: self.dry_run,
        };

        let report = tokio::select! {
            report = ops::generate_all(source.reader(), &tables, &options) => Some(report),
            _ = tokio::signal::ctrl_c() => None,
        };
        source.close().await;

        let Some(report) = report else {
            eyre::bail!("interrupted");
        };
        report.render(&mut TerminalOutput::new());

        Ok(())
    }

    /// `--tables` first, then positional names, without repeats.
    fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for name in self.tables.iter().chain(&self.table_args) {
            let name = name.trim();
            if !name.is_empty() && !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        names
    }
}
