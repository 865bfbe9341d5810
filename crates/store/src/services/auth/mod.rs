//! Authentication service.
//!
//! Handles account creation and login. Credentials are opaque strings
//! compared verbatim against the stored value; the comparison runs as a
//! bound-parameter query.

mod error;

pub use error::AuthError;

use sqlx::PgPool;

use stonefire_core::{Login, Role};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::session::CurrentUser;
use crate::models::user::NewUser;

/// Raw signup input as collected by a shell.
#[derive(Debug, Clone)]
pub struct Signup {
    pub login: String,
    pub password: String,
    pub role: String,
    pub favorite_items: String,
    pub phone_num: String,
}

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Returns the validated login on success.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidLogin` if the login fails validation.
    /// Returns `AuthError::InvalidRole` if the role is unrecognized.
    /// Returns `AuthError::EmptyPassword` if the password is empty.
    /// Returns `AuthError::UserAlreadyExists` if the login is taken.
    pub async fn sign_up(&self, signup: Signup) -> Result<Login, AuthError> {
        let login = Login::parse(&signup.login)?;

        let role: Role = signup.role.parse().map_err(|_| AuthError::InvalidRole)?;

        if signup.password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let user = NewUser {
            login: login.clone(),
            password: signup.password,
            role,
            favorite_items: signup.favorite_items,
            phone_num: signup.phone_num,
        };

        self.users.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Repository(other),
        })?;

        tracing::info!(%login, %role, "user created");

        Ok(login)
    }

    /// Authenticate a login/password pair.
    ///
    /// On success returns the session identity carrying the user's role;
    /// on mismatch no session is established.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair matches no user.
    pub async fn log_in(&self, login: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let login = Login::parse(login).map_err(|_| AuthError::InvalidCredentials)?;

        let role = self
            .users
            .verify_credentials(&login, password)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(%login, %role, "login successful");

        Ok(CurrentUser::new(login, role))
    }
}
