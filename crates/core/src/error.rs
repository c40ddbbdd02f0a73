//! Error types for the Baler domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Retrieval failures keep their own enum so knowledge base implementations
//! can report backend-specific causes without widening the engine contract.

use thiserror::Error;

/// The top-level error type for all Baler operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Construction errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Call-time input errors ---
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // --- Retrieval errors ---
    #[error("Retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Declared-but-unimplemented entry points ---
    #[error("Not implemented: {operation}")]
    NotImplemented { operation: &'static str },
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by knowledge base implementations.
///
/// Propagated unchanged through the engine — no retry, no partial-result
/// fallback. Retry policy belongs to the backend or the caller.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}
