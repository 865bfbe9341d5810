//! Store location domain type.

use stonefire_core::StoreId;

/// A physical store location.
#[derive(Debug, Clone)]
pub struct StoreLocation {
    /// Unique store id.
    pub store_id: StoreId,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
}
