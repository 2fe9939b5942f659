//! Error types for store operations
//!
//! Shared by both backends: the Postgres repositories and the in-memory
//! store surface the same `StoreError` so callers never depend on which
//! variant is configured.

use thiserror::Error;

/// Errors that can occur while reading or writing the entity store
///
/// Point-lookup misses are NOT errors: repositories return `Option::None`
/// for an absent symbol or user and reserve `StoreError` for real failures
/// plus the one domain conflict (`DuplicateEntry`).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Could not obtain a connection from the pool
    #[error("Connection pool error: {0}")]
    ConnectionPool(String),

    /// Initial connection test against the database failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Embedded migrations could not be applied
    #[error("Migration error: {0}")]
    Migration(String),

    /// The watchlist already holds this symbol for the user
    #[error("{0} is already on the watchlist")]
    DuplicateEntry(String),

    /// Diesel query error
    #[error("Database query error: {0}")]
    Query(#[from] diesel::result::Error),
}

impl StoreError {
    /// Returns true for the watchlist add conflict
    pub fn is_duplicate_entry(&self) -> bool {
        matches!(self, StoreError::DuplicateEntry(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateEntry("AAPL".to_string());
        assert_eq!(err.to_string(), "AAPL is already on the watchlist");
    }

    #[test]
    fn test_duplicate_entry_category() {
        assert!(StoreError::DuplicateEntry("MSFT".to_string()).is_duplicate_entry());
        assert!(!StoreError::ConnectionPool("pool exhausted".to_string()).is_duplicate_entry());
    }
}
