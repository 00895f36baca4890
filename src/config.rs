//! Configuration management for the contact manager.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is a
//! valid configuration.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long each notice stays visible, in milliseconds (default: 4000)
    pub notice_duration_ms: u64,

    /// Open the contact screen directly instead of the launcher (default: false)
    pub skip_launcher: bool,

    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_NOTICE_DURATION_MS`: Notice display time (default: 4000)
    /// - `CONTACTS_SKIP_LAUNCHER`: `true`/`false` (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which is the UI here
        let _ = dotenvy::dotenv();

        let notice_duration_ms = Self::parse_env_u64("CONTACTS_NOTICE_DURATION_MS", 4000)?;
        let skip_launcher = Self::parse_env_bool("CONTACTS_SKIP_LAUNCHER", false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            notice_duration_ms,
            skip_launcher,
            log_level,
        })
    }

    /// Notice display time as a `Duration`.
    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(true),
                "0" | "false" | "no" => Ok(false),
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
            notice_duration_ms: 4000,
            skip_launcher: false,
            log_level: "error".to_string(),
        }
    }
}
