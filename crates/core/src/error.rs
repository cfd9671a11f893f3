//! Base error types for cadre
//!
//! This module provides the foundation error types that all crates can use.

use std::path::PathBuf;
use thiserror::Error;

/// Base error type for shared functionality
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Identifier does not follow the identifier rules
    #[error("Invalid command identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// The rejected name as given
        name: String,
        /// Which rule the name breaks
        reason: &'static str,
    },

    /// Two commands registered under the same identifier
    #[error("Command '{0}' is already registered")]
    DuplicateCommand(String),

    /// No command registered under the identifier
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Shell dialect not supported by completion scripts
    #[error("Unsupported shell '{0}' (expected one of: bash, zsh, fish)")]
    UnknownShell(String),

    /// Configuration file could not be parsed
    #[error("Failed to parse config file {}: {message}", path.display())]
    Config {
        /// Path of the config file
        path: PathBuf,
        /// Parser or validation message
        message: String,
    },

    /// Generic error message
    #[error("{0}")]
    Message(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;

    #[test]
    fn test_invalid_identifier_message() {
        let err = Error::InvalidIdentifier {
            name: "Bad Name".to_string(),
            reason: "contains whitespace",
        };
        let msg = err.to_string();
        assert!(msg.contains("Bad Name"));
        assert!(msg.contains("contains whitespace"));
    }

    #[test]
    fn test_config_error_includes_path() {
        let err = Error::Config {
            path: PathBuf::from("/etc/cadre/config.toml"),
            message: "expected a table".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/cadre/config.toml"));
        assert!(msg.contains("expected a table"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_error.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("IO error"));
    }
}
