//! Error types for counsel-core

use thiserror::Error;

/// Core error type
#[derive(Debug, Error)]
pub enum Error {
    /// Credential missing or unusable at startup
    #[error("credential error: {0}")]
    Credential(String),

    /// The completion provider failed
    #[error(transparent)]
    Llm(#[from] counsel_llm::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
