use std::io;

/// Errors that can occur while loading configuration or evaluating matchers
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),
}

/// Result type alias for assert-drills operations
pub type Result<T> = std::result::Result<T, Error>;
