//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::domain::{ClockIdGenerator, IdGenerator, SequentialIdGenerator};
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;
use std::sync::Arc;

/// How new contacts get their ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Milliseconds since the Unix epoch, bumped on collision
    #[default]
    Clock,

    /// 1, 2, 3, ...
    Sequential,
}

impl IdStrategy {
    /// Build the generator for this strategy.
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            Self::Clock => Arc::new(ClockIdGenerator::new()),
            Self::Sequential => Arc::new(SequentialIdGenerator::new()),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clock" => Ok(Self::Clock),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("Must be 'clock' or 'sequential', got: {}", other)),
        }
    }
}

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Trim the name before validating it (default: false)
    pub trim_name: bool,

    /// Reset the form when the contact being edited is deleted (default: true)
    pub reset_form_on_delete: bool,

    /// Id assignment for new contacts (default: clock)
    pub id_strategy: IdStrategy,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `CONTACTS_TRIM_NAME`: `true`/`false` (default: false)
    /// - `CONTACTS_RESET_FORM_ON_DELETE`: `true`/`false` (default: true)
    /// - `CONTACTS_ID_STRATEGY`: `clock` or `sequential` (default: clock)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let trim_name = Self::parse_env_bool("CONTACTS_TRIM_NAME", defaults.trim_name)?;
        let reset_form_on_delete = Self::parse_env_bool(
            "CONTACTS_RESET_FORM_ON_DELETE",
            defaults.reset_form_on_delete,
        )?;

        let id_strategy = match env::var("CONTACTS_ID_STRATEGY") {
            Ok(val) => val.parse().map_err(|reason| ConfigError::InvalidValue {
                var: "CONTACTS_ID_STRATEGY".to_string(),
                reason,
            })?,
            Err(_) => defaults.id_strategy,
        };

        Ok(Config {
            log_level,
            trim_name,
            reset_form_on_delete,
            id_strategy,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            trim_name: false,
            reset_form_on_delete: true,
            id_strategy: IdStrategy::Clock,
        }
    }
}
