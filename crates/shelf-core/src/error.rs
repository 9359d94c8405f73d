//! Error types for Shelf core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages. Validation and eligibility failures are ordinary
//! values the caller reports and moves past - only persistence failures
//! are fatal to the operation that hit them.

use thiserror::Error;

/// Result type alias for Shelf operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Core error type for Shelf operations.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Publication year failed validation (non-numeric or out of range)
    #[error("Invalid publication year: {0} (expected a year like 1996)")]
    InvalidYear(String),

    /// Borrow target is not in the available set
    #[error("Book with index {0} is not available for borrowing")]
    NotAvailable(u32),

    /// Return target is not in the borrowed set
    #[error("Book with index {0} is not borrowed")]
    NotBorrowed(u32),

    /// Search keyword failed to compile into a pattern
    #[error("Invalid search pattern: {0}")]
    Pattern(String),

    /// Library file contents could not be parsed
    #[error("Malformed library file: {0}")]
    Malformed(String),

    /// Filesystem error while loading or saving
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for ShelfError {
    fn from(err: std::io::Error) -> Self {
        ShelfError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ShelfError {
    fn from(err: serde_json::Error) -> Self {
        ShelfError::Malformed(err.to_string())
    }
}
