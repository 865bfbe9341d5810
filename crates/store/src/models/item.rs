//! Menu item domain types.

use stonefire_core::Price;

/// A menu item.
#[derive(Debug, Clone)]
pub struct Item {
    /// Unique item name.
    pub name: String,
    /// Ingredient list.
    pub ingredients: String,
    /// Category tag (e.g. "entree", "drinks", "sides").
    pub type_of_item: String,
    /// Non-negative price.
    pub price: Price,
    /// Free-text description.
    pub description: String,
}

/// How to narrow or order a menu listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuFilter {
    /// Every item, by name.
    All,
    /// Items whose category matches, case-insensitively.
    Category(String),
    /// Items at or below a maximum price.
    MaxPrice(Price),
    /// Every item, ordered by price.
    ByPrice(PriceOrder),
}

/// Price sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    LowestFirst,
    HighestFirst,
}
