use thiserror::Error;

/// Core error type shared across Rosterforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A sink backing an id query failed.
    #[error("id source error: {0}")]
    IdSource(String),
    /// A skill preset violates its invariants.
    #[error("invalid preset: {0}")]
    InvalidPreset(String),
    /// A configuration value is missing or unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Rosterforge crates.
pub type Result<T> = std::result::Result<T, Error>;
