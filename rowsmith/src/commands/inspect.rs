use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::{Source, UnwrapOrExit};
use crate::{
    config::Settings,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Tables to inspect
    #[arg(required = true, value_name = "TABLE")]
    tables: Vec<String>,

    /// Print a JSON schema snapshot, usable with `generate --schema-file`
    #[arg(long)]
    json: bool,

    /// Read columns from a JSON snapshot instead of the server
    #[arg(long, value_name = "FILE")]
    schema_file: Option<PathBuf>,
}

impl InspectCommand {
    pub async fn run(&self, settings: &Settings) -> Result<()> {
        let source = Source::open(self.schema_file.as_ref(), &settings.mysql).await;
        let result = ops::inspect(source.reader(), &self.tables).await;
        source.close().await;
        let report = result.unwrap_or_exit();

        if self.json {
            println!("{}", report.snapshot().to_json().unwrap_or_exit());
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
