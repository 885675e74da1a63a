use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_PROD_ID, ENV_PREFIX};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub ical: IcalConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IcalConfig {
    pub prod_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Substitute documented defaults for unset fields when writing JSON.
    pub include_defaults: bool,
    pub pretty: bool,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `CALMAP_*` environment variables and an
    /// optional configuration file. Nested keys use a double underscore, e.g.
    /// `CALMAP_OUTPUT__INCLUDE_DEFAULTS=true`.
    ///
    /// When `file` is `None`, `calmap.{toml,json,yaml}` in the working directory is
    /// read if present. An explicit file must exist.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let builder = Config::builder()
            .set_default("logging.level", "info")?
            .set_default("ical.prod_id", DEFAULT_PROD_ID)?
            .set_default("output.include_defaults", false)?
            .set_default("output.pretty", true)?;

        let builder = match file {
            Some(path) => builder.add_source(config::File::from(path)),
            None => builder.add_source(config::File::with_name(CONFIG_FILE_NAME).required(false)),
        };

        Ok(builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and the config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(file)?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
