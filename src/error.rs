//! Error types for the monitoring shell.

use thiserror::Error;

/// Errors raised while dispatching commands or setting up a session.
///
/// Every variant except the startup ones (`Config`, `Model`) is recovered by the
/// shell loop: it is reported to the user and the session keeps going.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command \"{0}\" is not available in this context")]
    NotApplicable(String),

    #[error("{0}")]
    InvalidTransition(String),

    #[error("Failed: client in read-only mode")]
    ReadOnly,

    #[error("Aborted")]
    Aborted,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Entity model error: {0}")]
    Model(String),

    #[error("Command submission failed: {0}")]
    Gateway(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ShellError {
    fn from(err: config::ConfigError) -> Self {
        ShellError::Config(err.to_string())
    }
}
