//! # Store Error Types
//!
//! Error types for Inventory Store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)        ValidationError (core)              │
//! │       │                                  │                              │
//! │       ▼                                  ▼                              │
//! │  StoreError (this module) ← categorized by the operation that failed   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Presentation layer shows "Failed to add product" etc.                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no `NotFound`: updating or deleting a missing id succeeds and
//! reports zero affected rows.

use std::fmt::Display;

use storekeeper_core::ValidationError;
use thiserror::Error;

/// Inventory Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file cannot be opened or the schema cannot be created.
    ///
    /// ## When This Occurs
    /// - Parent directory missing or not writable
    /// - File is not a SQLite database
    /// - Disk full while creating the table
    ///
    /// Fatal to the session.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An insert, update or delete could not be committed.
    ///
    /// Never retried by the store.
    #[error("Failed to {operation} product: {message}")]
    WriteFailed {
        operation: &'static str,
        message: String,
    },

    /// A read could not be completed. No partial results are returned.
    #[error("Read failed: {0}")]
    ReadFailed(String),

    /// The record was rejected before reaching the storage engine.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl StoreError {
    pub(crate) fn unavailable(err: impl Display) -> Self {
        StoreError::StorageUnavailable(err.to_string())
    }

    pub(crate) fn write_failed(operation: &'static str, err: &sqlx::Error) -> Self {
        StoreError::WriteFailed {
            operation,
            message: describe(err),
        }
    }

    pub(crate) fn read_failed(err: &sqlx::Error) -> Self {
        StoreError::ReadFailed(describe(err))
    }

    /// Whether the session cannot continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, StoreError::StorageUnavailable(_))
    }
}

/// Extracts the engine's own message where there is one.
///
/// ```text
/// sqlx::Error::Database   → "NOT NULL constraint failed: products.name"
/// sqlx::Error::Io         → "I/O: <os error>"
/// Other                   → Display of the sqlx error
/// ```
fn describe(err: &sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().to_string(),
        sqlx::Error::Io(io_err) => format!("I/O: {}", io_err),
        _ => err.to_string(),
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::write_failed("insert", &sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Failed to insert product: "));

        let err = StoreError::unavailable("unable to open database file");
        assert_eq!(
            err.to_string(),
            "Storage unavailable: unable to open database file"
        );
    }

    #[test]
    fn test_validation_converts_to_invalid_input() {
        let err: StoreError = ValidationError::required("name").into();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: name is required");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_only_unavailable_is_fatal() {
        assert!(StoreError::unavailable("disk full").is_fatal());
        assert!(!StoreError::read_failed(&sqlx::Error::PoolClosed).is_fatal());
    }
}
