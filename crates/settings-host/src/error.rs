//! Error types for settings-host

/// Result type for settings-host operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a host
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Environment declaration or resolution error from settings-core
    #[error(transparent)]
    Core(#[from] settings_core::Error),

    /// Error from the configuration store
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Malformed command-line switch
    #[error("Invalid command-line argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}
