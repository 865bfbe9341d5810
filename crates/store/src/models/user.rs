//! User domain types.

use stonefire_core::{Login, Role};

/// A user record as shown in profile and administration views.
///
/// The credential string never leaves the database layer, so it is absent
/// here.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique login.
    pub login: Login,
    /// Permission role.
    pub role: Role,
    /// Free-text favorite items.
    pub favorite_items: String,
    /// Phone number.
    pub phone_num: String,
}

/// Input for account creation.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login: Login,
    pub password: String,
    pub role: Role,
    pub favorite_items: String,
    pub phone_num: String,
}

/// A single-field change to another user's record (manager administration).
#[derive(Debug, Clone)]
pub enum UserUpdate {
    Role(Role),
    Password(String),
    PhoneNum(String),
    FavoriteItems(String),
    Login(Login),
}
