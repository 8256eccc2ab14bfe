//! Cache error types

use thiserror::Error;

/// Cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("API service not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
