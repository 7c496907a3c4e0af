//! Common error types for Cellar

use thiserror::Error;

/// Common result type for Cellar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the Cellar catalog viewer
///
/// A load or parse failure is terminal for the session: the service never
/// serves a partially-loaded catalog.
#[derive(Error, Debug)]
pub enum Error {
    /// Source retrieval error (network or file)
    #[error("Load error: {0}")]
    Load(String),

    /// Malformed CSV (wraps csv::Error)
    #[error("Parse error: {0}")]
    Parse(#[from] csv::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
