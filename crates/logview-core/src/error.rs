//! Error types for logview.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in logview.
#[derive(Debug, Error)]
pub enum Error {
    /// No container with the given name exists.
    #[error("container not found: {0}")]
    ContainerNotFound(String),

    /// Docker error.
    #[error("docker error: {0}")]
    Docker(String),

    /// Log output was not valid UTF-8.
    #[error("decode error: {0}")]
    Decode(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Page template error.
    #[error("template error: {0}")]
    Template(String),
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::Decode(err.to_string())
    }
}
