mod commands;
mod config;
mod ops;
mod reports;

use clap::Parser;
use eyre::{Result, WrapErr};

use crate::{commands::Cli, config::Settings};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let settings =
        Settings::load(cli.config.as_deref()).wrap_err("failed to load configuration")?;

    let filter = if cli.quiet {
        "error"
    } else if cli.verbose || settings.debug {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    cli.run(settings).await
}
