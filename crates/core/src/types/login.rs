//! User login identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Login`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum LoginError {
    /// The input string is empty.
    #[error("login cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("login must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains whitespace.
    #[error("login cannot contain whitespace")]
    ContainsWhitespace,
}

/// A user login identifier.
///
/// The login is the primary key of the `Users` table and the identity
/// carried by an authenticated session.
///
/// ## Constraints
///
/// - Length: 1-50 characters (column width)
/// - No whitespace
///
/// ## Examples
///
/// ```
/// use stonefire_core::Login;
///
/// assert!(Login::parse("amy").is_ok());
/// assert!(Login::parse("driver_07").is_ok());
///
/// assert!(Login::parse("").is_err());          // empty
/// assert!(Login::parse("two words").is_err()); // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Login(String);

impl Login {
    /// Maximum length of a login (matches the column width).
    pub const MAX_LENGTH: usize = 50;

    /// Parse a `Login` from a string.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed input is empty, longer than 50
    /// characters, or contains interior whitespace.
    pub fn parse(s: &str) -> Result<Self, LoginError> {
        let s = s.trim();

        if s.is_empty() {
            return Err(LoginError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(LoginError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(LoginError::ContainsWhitespace);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the login as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Login` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Login {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Login {
    type Err = LoginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Login {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Login {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Login {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        // Database values are assumed valid
        Ok(Self(s))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Login {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_logins() {
        assert!(Login::parse("amy").is_ok());
        assert!(Login::parse("driver_07").is_ok());
        assert!(Login::parse("Manager.One").is_ok());
    }

    #[test]
    fn test_parse_trims() {
        let login = Login::parse("  amy  ").unwrap();
        assert_eq!(login.as_str(), "amy");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(Login::parse(""), Err(LoginError::Empty)));
        assert!(matches!(Login::parse("   "), Err(LoginError::Empty)));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "a".repeat(51);
        assert!(matches!(Login::parse(&long), Err(LoginError::TooLong { .. })));
    }

    #[test]
    fn test_parse_whitespace() {
        assert!(matches!(
            Login::parse("two words"),
            Err(LoginError::ContainsWhitespace)
        ));
    }

    #[test]
    fn test_display() {
        let login = Login::parse("amy").unwrap();
        assert_eq!(format!("{login}"), "amy");
    }

    #[test]
    fn test_serde_roundtrip() {
        let login = Login::parse("amy").unwrap();
        let json = serde_json::to_string(&login).unwrap();
        assert_eq!(json, "\"amy\"");

        let parsed: Login = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, login);
    }
}
