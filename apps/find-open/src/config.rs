//! Command line and configuration file.
//!
//! ```text
//! find-open [--config <file.toml>] [--data <rest_hours.json>] [dump]
//! ```
//!
//! ```toml
//! # find_open.toml
//! restaurants_path = "data/rest_hours.json"
//! log_level        = "warn"
//! ```
//!
//! Every key is optional.  `--data` wins over `restaurants_path`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_RESTAURANTS_FILE: &str = "rest_hours.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path:?}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}\nusage: find-open [--config <file>] [--data <file>] [dump]")]
    Usage(String),
}

// ── FinderConfig ──────────────────────────────────────────────────────────────

/// Settings for one run, built once in `main` and passed down explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinderConfig {
    /// JSON file of `{name, times}` records.
    pub restaurants_path: PathBuf,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level:        String,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            restaurants_path: PathBuf::from(DEFAULT_RESTAURANTS_FILE),
            log_level:        DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl FinderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Resolve the effective configuration for `args`.
    pub fn resolve(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(data) = &args.data {
            config.restaurants_path = data.clone();
        }
        Ok(config)
    }
}

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Command {
    /// Prompt for moments until an empty line.
    #[default]
    Interactive,
    /// Print every restaurant's parsed schedule and exit.
    Dump,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub config:  Option<PathBuf>,
    pub data:    Option<PathBuf>,
    pub command: Command,
}

impl CliArgs {
    /// Parse the arguments after the program name.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, ConfigError> {
        let mut out = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => out.config = Some(value_for(&arg, args.next())?),
                "--data" => out.data = Some(value_for(&arg, args.next())?),
                "dump" => out.command = Command::Dump,
                other => {
                    return Err(ConfigError::Usage(format!("unexpected argument {other:?}")));
                }
            }
        }

        Ok(out)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<PathBuf, ConfigError> {
    value
        .map(PathBuf::from)
        .ok_or_else(|| ConfigError::Usage(format!("{flag} requires a file path")))
}
