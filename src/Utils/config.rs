//! Settings of the `rusted_symdiff` binary, read from a TOML file like
//! ```toml
//! prompt = "d/dx> "
//! max_depth = 500
//! log_level = "debug"
//! log_file = "symdiff.log"
//! console_log = false
//! ```
//! Every key is optional, missing keys keep their default value.

use crate::symbolic::parse_expr::DEFAULT_MAX_DEPTH;
use log::LevelFilter;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use toml::{Table, Value};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
    #[error("unknown config key '{0}'")]
    UnknownKey(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiffConfig {
    /// text printed before every line read in the interactive loop
    pub prompt: String,
    /// nesting limit of parse and derive
    pub max_depth: usize,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    pub console_log: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        DiffConfig {
            prompt: "> ".to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: LevelFilter::Info,
            log_file: None,
            console_log: true,
        }
    }
}

fn invalid(key: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| invalid(key, "expected a string"))
}

impl DiffConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: Table = content.parse()?;
        let mut config = DiffConfig::default();
        for (key, value) in table.iter() {
            match key.as_str() {
                "prompt" => config.prompt = expect_str(key, value)?.to_string(),
                "max_depth" => {
                    let depth = value
                        .as_integer()
                        .ok_or_else(|| invalid(key, "expected an integer"))?;
                    if depth <= 0 {
                        return Err(invalid(key, "must be positive"));
                    }
                    config.max_depth = depth as usize;
                }
                "log_level" => {
                    let level = expect_str(key, value)?;
                    config.log_level = LevelFilter::from_str(level)
                        .map_err(|_| invalid(key, "expected off, error, warn, info, debug or trace"))?;
                }
                "log_file" => config.log_file = Some(expect_str(key, value)?.to_string()),
                "console_log" => {
                    config.console_log = value
                        .as_bool()
                        .ok_or_else(|| invalid(key, "expected true or false"))?
                }
                other => return Err(ConfigError::UnknownKey(other.to_string())),
            }
        }
        Ok(config)
    }
}
