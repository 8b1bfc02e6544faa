//! Error types for testsql.

use thiserror::Error;

/// Main error type for testsql operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TestSqlError {
    /// Database error from rusqlite.
    #[error("{0}")]
    Database(#[from] rusqlite::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Page number or page size out of range.
    #[error("Invalid page: page {page} with page size {page_size} (both must be at least 1)")]
    InvalidPage {
        /// Requested 1-based page.
        page: u32,
        /// Requested rows per page.
        page_size: u32,
    },
}

impl TestSqlError {
    /// Whether this error is a SQLite constraint violation (`UNIQUE`, `NOT NULL`, ...).
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Database(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

/// Result type alias for testsql operations.
pub type Result<T> = std::result::Result<T, TestSqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_message() {
        let err = TestSqlError::InvalidPage {
            page: 0,
            page_size: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid page: page 0 with page size 3 (both must be at least 1)"
        );
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn test_constraint_violation_detection() {
        let failure = rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE);
        let err = TestSqlError::from(rusqlite::Error::SqliteFailure(
            failure,
            Some("UNIQUE constraint failed: Users.email".to_string()),
        ));
        assert!(err.is_constraint_violation());
        assert_eq!(err.to_string(), "UNIQUE constraint failed: Users.email");
    }
}
