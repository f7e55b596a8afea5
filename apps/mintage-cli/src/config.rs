//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! ## Environment Variables
//! - `MINTAGE_PROMPT`: prompt for `interactive` (empty string disables it)
//! - `MINTAGE_PRETTY_JSON`: pretty-print workflow output (`true` / `false`)
//! - `MINTAGE_LOG_INPUTS`: include raw amount text in debug logs
//!
//! Log levels are not configured here; `RUST_LOG` drives the tracing filter.

use serde::{Deserialize, Serialize};
use std::env;

/// Default prompt for the interactive reader.
pub const DEFAULT_PROMPT: &str = "> ";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Prompt printed before each interactive read
    pub prompt: String,

    /// Pretty-print JSON written by `workflow`
    pub pretty_json: bool,

    /// Log raw input text at debug level
    pub log_inputs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            pretty_json: true,
            log_inputs: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Lets tests supply variables without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        Ok(CliConfig {
            prompt: lookup("MINTAGE_PROMPT").unwrap_or(defaults.prompt),

            pretty_json: parse_bool(&lookup, "MINTAGE_PRETTY_JSON")?
                .unwrap_or(defaults.pretty_json),

            log_inputs: parse_bool(&lookup, "MINTAGE_LOG_INPUTS")?
                .unwrap_or(defaults.log_inputs),
        })
    }
}

fn parse_bool<F>(lookup: &F, name: &str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue(name.to_string())),
        },
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
