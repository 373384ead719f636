use std::io;
use thiserror::Error;

/// Error type for the status line generator
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Display sink unavailable: {0}")]
    SinkUnavailable(String),

    #[error("Failed to publish status: {0}")]
    Publish(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for the status line generator
pub type Result<T> = std::result::Result<T, StatusError>;

impl StatusError {
    /// Create a sink unavailable error
    pub fn sink_unavailable<S: Into<String>>(msg: S) -> Self {
        StatusError::SinkUnavailable(msg.into())
    }

    /// Create a publish error
    pub fn publish<S: Into<String>>(msg: S) -> Self {
        StatusError::Publish(msg.into())
    }

    /// Create a template error
    pub fn template<S: Into<String>>(msg: S) -> Self {
        StatusError::Template(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatusError::Config(msg.into())
    }
}
