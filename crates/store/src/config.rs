//! Store configuration from command-line arguments and environment.
//!
//! Both shells take the same three positional arguments — database name,
//! port, and user — matching the deployment convention of a locally running
//! `PostgreSQL`. The password comes from the environment so it never appears
//! in a process listing.
//!
//! # Environment Variables
//!
//! - `STONEFIRE_DB_PASSWORD` - database password (optional, default empty)
//! - `RUST_LOG` - tracing filter directive

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the database password.
pub const DB_PASSWORD_ENV: &str = "STONEFIRE_DB_PASSWORD";

/// Connection settings for the store database.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database name.
    pub dbname: String,
    /// `PostgreSQL` port on localhost.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database password (may be empty).
    password: SecretString,
}

impl StoreConfig {
    /// Build a config from the positional arguments, reading the password
    /// from the environment.
    #[must_use]
    pub fn new(dbname: String, port: u16, user: String) -> Self {
        let password = std::env::var(DB_PASSWORD_ENV)
            .unwrap_or_default()
            .into();

        Self {
            dbname,
            port,
            user,
            password,
        }
    }

    /// Assemble the `PostgreSQL` connection URL.
    ///
    /// Wrapped in a `SecretString` because it carries the password.
    #[must_use]
    pub fn database_url(&self) -> SecretString {
        format!(
            "postgres://{}:{}@localhost:{}/{}",
            self.user,
            self.password.expose_secret(),
            self.port,
            self.dbname
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_shape() {
        let config = StoreConfig {
            dbname: "pizza".to_owned(),
            port: 5432,
            user: "app".to_owned(),
            password: SecretString::from(String::new()),
        };

        assert_eq!(
            config.database_url().expose_secret(),
            "postgres://app:@localhost:5432/pizza"
        );
    }
}
