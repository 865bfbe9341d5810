//! User permission roles.

use serde::{Deserialize, Serialize};

/// User role with different permission levels.
///
/// Roles are stored as text in the `Users` table and parsed
/// case-insensitively, since the source data mixes capitalizations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Places orders and manages their own profile.
    Customer,
    /// Customer permissions plus order-status updates.
    Driver,
    /// Driver permissions plus menu and user administration.
    Manager,
}

impl Role {
    /// Whether this role may change the status of any order.
    #[must_use]
    pub const fn can_update_order_status(self) -> bool {
        matches!(self, Self::Driver | Self::Manager)
    }

    /// Whether this role may edit the menu and other users' records.
    #[must_use]
    pub const fn is_manager(self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Whether this role sees every order, or only its own.
    #[must_use]
    pub const fn sees_all_orders(self) -> bool {
        matches!(self, Self::Driver | Self::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Customer => write!(f, "Customer"),
            Self::Driver => write!(f, "Driver"),
            Self::Manager => write!(f, "Manager"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(Self::Customer),
            "driver" => Ok(Self::Driver),
            "manager" => Ok(Self::Manager),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Customer".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!("MANAGER".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!(" driver ".parse::<Role>().unwrap(), Role::Driver);
        assert!("cook".parse::<Role>().is_err());
    }

    #[test]
    fn test_status_update_tier() {
        assert!(!Role::Customer.can_update_order_status());
        assert!(Role::Driver.can_update_order_status());
        assert!(Role::Manager.can_update_order_status());
    }

    #[test]
    fn test_manager_tier() {
        assert!(!Role::Customer.is_manager());
        assert!(!Role::Driver.is_manager());
        assert!(Role::Manager.is_manager());
    }

    #[test]
    fn test_display_roundtrip() {
        for role in [Role::Customer, Role::Driver, Role::Manager] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}
