//! Session-related types.

use serde::{Deserialize, Serialize};

use stonefire_core::{Login, Role};

/// The authenticated identity for the current session.
///
/// Created only by a successful credential match and dropped on logout.
/// Every role-gated operation authorizes from this value; identity is never
/// re-prompted once a session exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's login.
    pub login: Login,
    /// The user's permission role.
    pub role: Role,
}

impl CurrentUser {
    /// Create a session identity.
    #[must_use]
    pub const fn new(login: Login, role: Role) -> Self {
        Self { login, role }
    }
}
