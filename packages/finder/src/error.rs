//! Typed errors for the finder library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Model service unavailable or failed
    #[error("model service error: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("config error: {0}")]
    Config(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// JSON encoding error
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for finder operations.
pub type Result<T> = std::result::Result<T, FinderError>;
