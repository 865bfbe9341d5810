//! Order status values.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a food order.
///
/// Orders are created as [`OrderStatus::Placed`]; drivers and managers move
/// them through the remaining states. Stored as text in `FoodOrder` and
/// parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Initial state set at placement.
    #[default]
    Placed,
    Incomplete,
    InProgress,
    Complete,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Placed => write!(f, "placed"),
            Self::Incomplete => write!(f, "incomplete"),
            Self::InProgress => write!(f, "in progress"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "placed" => Ok(Self::Placed),
            "incomplete" => Ok(Self::Incomplete),
            "in progress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            "In Progress".parse::<OrderStatus>().unwrap(),
            OrderStatus::InProgress
        );
        assert_eq!(
            " COMPLETE ".parse::<OrderStatus>().unwrap(),
            OrderStatus::Complete
        );
        assert!("done".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for status in [
            OrderStatus::Placed,
            OrderStatus::Incomplete,
            OrderStatus::InProgress,
            OrderStatus::Complete,
        ] {
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(OrderStatus::default(), OrderStatus::Placed);
    }
}
