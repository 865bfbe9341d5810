//! Unified operation error handling.
//!
//! Every domain operation returns `Result<T, AppError>`. Errors never cross
//! an operation boundary upward: the presentation shells catch them, report
//! one line, and return to the menu.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type for domain operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Session role does not permit the operation. No mutation happened.
    #[error("access denied: {0}")]
    AccessDenied(String),

    /// Input could not be parsed or validated.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order 17".to_owned());
        assert_eq!(err.to_string(), "not found: order 17");

        let err = AppError::AccessDenied("only managers can update the menu".to_owned());
        assert_eq!(
            err.to_string(),
            "access denied: only managers can update the menu"
        );
    }
}
