//! Profile and user administration operations.

use sqlx::PgPool;

use stonefire_core::Login;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::error::{AppError, Result};
use crate::models::session::CurrentUser;
use crate::models::user::{User, UserUpdate};

/// Service for profile views/updates and manager-gated user administration.
pub struct AccountService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Fetch the session user's own profile.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` if the record has vanished.
    pub async fn profile(&self, session: &CurrentUser) -> Result<User> {
        self.users
            .get(&session.login)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user {}", session.login)))
    }

    /// Update the session user's favorite items.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the update fails.
    pub async fn update_favorite_items(
        &self,
        session: &CurrentUser,
        favorite_items: &str,
    ) -> Result<()> {
        self.users
            .set_favorite_items(&session.login, favorite_items)
            .await?;
        Ok(())
    }

    /// Update the session user's phone number.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the update fails.
    pub async fn update_phone(&self, session: &CurrentUser, phone_num: &str) -> Result<()> {
        self.users.set_phone(&session.login, phone_num).await?;
        Ok(())
    }

    /// Update the session user's password.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the new password is empty.
    pub async fn update_password(&self, session: &CurrentUser, password: &str) -> Result<()> {
        if password.is_empty() {
            return Err(AppError::InvalidInput("password cannot be empty".to_owned()));
        }
        self.users.set_password(&session.login, password).await?;
        Ok(())
    }

    /// Apply a single-field change to another user's record.
    ///
    /// Manager only; authorized from the session role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` for non-managers; no mutation happens.
    /// Returns `AppError::NotFound` if the target login doesn't exist.
    pub async fn update_user(
        &self,
        session: &CurrentUser,
        target: &Login,
        update: UserUpdate,
    ) -> Result<()> {
        if !session.role.is_manager() {
            tracing::warn!(actor = %session.login, "user update denied");
            return Err(AppError::AccessDenied(
                "only managers can update user records".to_owned(),
            ));
        }

        let result = match &update {
            UserUpdate::Role(role) => self.users.set_role(target, *role).await,
            UserUpdate::Password(password) => self.users.set_password(target, password).await,
            UserUpdate::PhoneNum(phone) => self.users.set_phone(target, phone).await,
            UserUpdate::FavoriteItems(items) => self.users.set_favorite_items(target, items).await,
            UserUpdate::Login(new_login) => self.users.rename(target, new_login).await,
        };

        result.map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound(format!("user {target}")),
            other => AppError::Repository(other),
        })?;

        tracing::info!(actor = %session.login, %target, "user record updated");

        Ok(())
    }
}
