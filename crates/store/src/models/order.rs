//! Order domain types and the in-memory cart.

use chrono::{DateTime, Utc};

use stonefire_core::{Login, OrderId, OrderStatus, Price, StoreId};

/// An order header.
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    /// Owning user.
    pub login: Login,
    pub store_id: StoreId,
    /// Sum of line totals at placement time.
    pub total_price: Price,
    pub order_timestamp: DateTime<Utc>,
    pub order_status: OrderStatus,
}

/// One (item, quantity) pair persisted with an order.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub item_name: String,
    pub quantity: i32,
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub total: Price,
}

/// A cart line accumulated before placement.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: Price,
}

impl CartLine {
    /// Price of this line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }
}

/// An in-memory cart, built up line by line before an order is placed.
///
/// Lines with the same item name merge by summing quantities, so placement
/// emits one row per distinct item.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a validated line. Quantity must already be positive.
    pub fn add(&mut self, item_name: &str, quantity: i32, unit_price: Price) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.item_name == item_name) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                item_name: item_name.to_owned(),
                quantity,
                unit_price,
            });
        }
    }

    /// Running total across all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// The accumulated lines, one per distinct item.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn price(s: &str) -> Price {
        Price::parse(s).unwrap()
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_running_total() {
        let mut cart = Cart::new();
        cart.add("Cheese Pizza", 2, price("5.00"));
        cart.add("Soda", 1, price("3.00"));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total().to_string(), "13.00");
    }

    #[test]
    fn test_duplicate_items_merge() {
        let mut cart = Cart::new();
        cart.add("Soda", 1, price("3.00"));
        cart.add("Soda", 2, price("3.00"));

        assert_eq!(cart.len(), 1);
        let line = cart.lines().first().unwrap();
        assert_eq!(line.quantity, 3);
        assert_eq!(cart.total().to_string(), "9.00");
    }

    #[test]
    fn test_line_total() {
        let line = CartLine {
            item_name: "Garlic Knots".to_owned(),
            quantity: 4,
            unit_price: price("2.25"),
        };
        assert_eq!(line.line_total().to_string(), "9.00");
    }
}
