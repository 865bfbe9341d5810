//! Authentication error types.

use thiserror::Error;

use stonefire_core::LoginError;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The login string failed validation.
    #[error("invalid login: {0}")]
    InvalidLogin(#[from] LoginError),

    /// The role string is not one of Customer, Driver, Manager.
    #[error("invalid role: expected Customer, Driver, or Manager")]
    InvalidRole,

    /// The password is empty.
    #[error("password cannot be empty")]
    EmptyPassword,

    /// A user with this login already exists.
    #[error("a user with this login already exists")]
    UserAlreadyExists,

    /// Login/password pair did not match any user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
