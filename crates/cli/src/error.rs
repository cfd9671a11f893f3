//! Error types for commands
//!
//! Command failures belong to the command that raised them. The framework
//! only adds the few cases it detects itself (missing or unknown
//! sub-commands) and otherwise hands errors back to the caller unchanged.

use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// A group without a default command was run directly
    #[error("Missing subcommand for '{group}' (available: {available})")]
    MissingSubcommand {
        /// Executable path of the group
        group: String,
        /// Space-separated identifiers of the group's commands
        available: String,
    },

    /// No command registered under the requested identifier
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command-defined failure
    #[error(transparent)]
    Failed(Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the core crates
    #[error(transparent)]
    Core(#[from] cadre_core::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

impl CommandError {
    /// Wrap a command-defined error
    pub fn failed<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Failed(Box::new(err))
    }

    /// Get the command-defined error, if this is one
    pub fn as_failure(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Failed(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
