//! Layered settings: defaults, an optional TOML file, then environment.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use rowsmith_schema::MySqlConfig;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "rowsmith";

const ENV_PREFIX: &str = "ROWSMITH";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mysql: MySqlConfig,
    pub debug: bool,
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist; the default `rowsmith.toml` is optional.
    /// Variables such as `ROWSMITH__MYSQL__HOST` override file values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }
}
