mod completions;
mod generate;
mod inspect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;
use rowsmith_schema::{MySqlConfig, MySqlSchemaReader, SchemaReader, SnapshotSchema};

use crate::config::Settings;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for rowsmith_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "rowsmith")]
#[command(version)]
#[command(about = "Generate Rust model structs from MySQL tables")]
pub(crate) struct Cli {
    /// Config file (defaults to ./rowsmith.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self, settings: Settings) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&settings).await,
            Commands::Inspect(cmd) => cmd.run(&settings).await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one model file per table
    Generate(GenerateCommand),

    /// Show the columns of tables and how they map to Rust
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where column metadata comes from.
enum Source {
    Server(MySqlSchemaReader),
    Snapshot(SnapshotSchema),
}

impl Source {
    /// Open a snapshot file when given, otherwise connect to the server.
    ///
    /// Either failure ends the process: nothing can be generated without
    /// a schema.
    async fn open(schema_file: Option<&PathBuf>, mysql: &MySqlConfig) -> Self {
        match schema_file {
            Some(path) => {
                log::debug!("reading schema snapshot {}", path.display());
                Source::Snapshot(SnapshotSchema::from_file(path).unwrap_or_exit())
            }
            None => Source::Server(MySqlSchemaReader::connect(mysql).await.unwrap_or_exit()),
        }
    }

    fn reader(&self) -> &dyn SchemaReader {
        match self {
            Source::Server(reader) => reader,
            Source::Snapshot(snapshot) => snapshot,
        }
    }

    async fn close(self) {
        if let Source::Server(reader) = self {
            reader.close().await;
        }
    }
}
