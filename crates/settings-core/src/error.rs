//! Error types for settings-core

use std::path::PathBuf;

/// Result type for settings-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while declaring, validating, or resolving environments
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An environment was constructed without a name
    #[error("Environment name must not be empty")]
    EmptyEnvironmentName,

    /// Two declared environments share a name (compared case-insensitively)
    #[error("Environment name '{name}' is not unique; environment names must be unique")]
    DuplicateEnvironmentName { name: String },

    /// Walking the parent links revisited an environment
    #[error("Environment inheritance cycle detected: {}", chain.join(" -> "))]
    CycleDetected { chain: Vec<String> },

    /// A declaration file could not be parsed
    #[error("Failed to parse environment declarations at {path}: {message}")]
    Declaration { path: PathBuf, message: String },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}
