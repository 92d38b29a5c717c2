use thiserror::Error;

/// Errors produced while configuring or driving a CRC computation.
#[derive(Debug, Error)]
pub enum Error {
    /// A descriptor parameter does not fit the declared degree, or the degree
    /// itself is not one of the supported widths.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No catalog entry matches the requested name.
    #[error("Unknown CRC variant: {0}")]
    UnknownVariant(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}

/// Result type for CRC operations
pub type Result<T> = std::result::Result<T, Error>;
