//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation failures live in [`crate::domain::ValidationError`] and
//! [`crate::form::FieldErrors`]; they are reported to the user, never raised.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors produced while parsing a shell command line.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// Blank input line
    #[error("Empty command")]
    Empty,

    /// First word is not a known command
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Command needs an argument that was not given
    #[error("Command '{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Command takes no argument but one was given
    #[error("Command '{0}' takes no arguments")]
    UnexpectedArgument(&'static str),

    /// Argument could not be parsed as a contact id
    #[error(transparent)]
    InvalidId(#[from] ValidationError),

    /// Input line is not valid UTF-8
    #[error("Input line is not valid UTF-8")]
    InvalidEncoding,
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "CONTACTS_TRIM_NAME".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACTS_TRIM_NAME: Must be true or false"
        );

        let err = CommandError::Unknown("frobnicate".to_string());
        assert_eq!(err.to_string(), "Unknown command: frobnicate");

        let err = CommandError::MissingArgument {
            command: "edit",
            argument: "a contact id",
        };
        assert_eq!(err.to_string(), "Command 'edit' requires a contact id");
    }

    #[test]
    fn test_invalid_id_is_transparent() {
        let err: CommandError = ValidationError::InvalidId("x".to_string()).into();
        assert_eq!(err.to_string(), "Invalid contact ID: x");
    }
}
