//! Error types for the Xyston library.
//!
//! All errors are represented by the [`XystonError`] enum. The combinator
//! operations themselves never fail; every failure surface sits at the
//! index boundary or the CLI edge.
//!
//! # Examples
//!
//! ```
//! use xyston::error::{Result, XystonError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(XystonError::index_unavailable("connection refused"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Xyston operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for the common variants.
#[derive(Error, Debug)]
pub enum XystonError {
    /// The term index could not be reached or read.
    ///
    /// Raised when a [`TermIndex`](crate::index::TermIndex) lookup fails;
    /// [`SearchResult::from_term`](crate::search::SearchResult::from_term)
    /// propagates it unchanged rather than returning a partial result.
    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),

    /// I/O errors (index files, CLI output).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid operation (bad CLI arguments).
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with XystonError.
pub type Result<T> = std::result::Result<T, XystonError>;

impl XystonError {
    /// Create a new index-unavailable error.
    pub fn index_unavailable<S: Into<String>>(msg: S) -> Self {
        XystonError::IndexUnavailable(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        XystonError::InvalidOperation(msg.into())
    }
}
