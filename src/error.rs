//! Error types for the contact manager.
//!
//! Form validation failures are not errors; they are reported through
//! [`ValidationReport`](crate::form::ValidationReport). The types here cover
//! configuration and the terminal command layer.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors from parsing or applying a typed command.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// The input is not a known command
    #[error("Unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    /// The command needs an argument that was not given
    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    /// The command argument could not be used
    #[error(transparent)]
    InvalidArgument(#[from] ValidationError),

    /// The command exists but not on the current screen
    #[error("'{command}' is not available on the {screen} screen")]
    WrongScreen {
        command: String,
        screen: &'static str,
    },
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
