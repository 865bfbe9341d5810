//! User repository for database operations.

use sqlx::{PgPool, Row};

use stonefire_core::{Login, Role};

use super::RepositoryError;
use crate::models::user::{NewUser, User};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user record.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the login already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, user: &NewUser) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO Users (login, password, role, favoriteItems, phoneNum)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&user.login)
        .bind(&user.password)
        .bind(user.role.to_string())
        .bind(&user.favorite_items)
        .bind(&user.phone_num)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("login already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Get a user by login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is invalid.
    pub async fn get(&self, login: &Login) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT login, role,
                   favoriteItems AS favorite_items,
                   phoneNum AS phone_num
            FROM Users
            WHERE login = $1
            ",
        )
        .bind(login)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => {
                let role: Role = r
                    .try_get::<String, _>("role")?
                    .parse()
                    .map_err(|e| RepositoryError::DataCorruption(format!("invalid role: {e}")))?;

                Ok(Some(User {
                    login: r.try_get("login")?,
                    role,
                    favorite_items: r.try_get("favorite_items")?,
                    phone_num: r.try_get("phone_num")?,
                }))
            }
            None => Ok(None),
        }
    }

    /// Match a login against its stored credential.
    ///
    /// Returns the user's role on a match, `None` otherwise. The credential
    /// is an opaque string compared verbatim; it is bound as a parameter and
    /// never spliced into the statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored role is invalid.
    pub async fn verify_credentials(
        &self,
        login: &Login,
        password: &str,
    ) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT role
            FROM Users
            WHERE login = $1 AND password = $2
            ",
        )
        .bind(login)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some(r) => {
                let role: Role = r
                    .try_get::<String, _>("role")?
                    .parse()
                    .map_err(|e| RepositoryError::DataCorruption(format!("invalid role: {e}")))?;
                Ok(Some(role))
            }
            None => Ok(None),
        }
    }

    /// Update a user's favorite items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the login doesn't exist.
    pub async fn set_favorite_items(
        &self,
        login: &Login,
        favorite_items: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE Users SET favoriteItems = $1 WHERE login = $2")
            .bind(favorite_items)
            .bind(login)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Update a user's phone number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the login doesn't exist.
    pub async fn set_phone(&self, login: &Login, phone_num: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE Users SET phoneNum = $1 WHERE login = $2")
            .bind(phone_num)
            .bind(login)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Update a user's credential string.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the login doesn't exist.
    pub async fn set_password(&self, login: &Login, password: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE Users SET password = $1 WHERE login = $2")
            .bind(password)
            .bind(login)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Update a user's role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the login doesn't exist.
    pub async fn set_role(&self, login: &Login, role: Role) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE Users SET role = $1 WHERE login = $2")
            .bind(role.to_string())
            .bind(login)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Change a user's login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the new login is taken.
    /// Returns `RepositoryError::NotFound` if the old login doesn't exist.
    pub async fn rename(&self, login: &Login, new_login: &Login) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE Users SET login = $1 WHERE login = $2")
            .bind(new_login)
            .bind(login)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("login already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
