//! Store listing operation.

use sqlx::PgPool;

use crate::db::stores::StoreRepository;
use crate::error::Result;
use crate::models::store::StoreLocation;

/// Service for store location reads.
pub struct StoreService<'a> {
    stores: StoreRepository<'a>,
}

impl<'a> StoreService<'a> {
    /// Create a new store service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            stores: StoreRepository::new(pool),
        }
    }

    /// List every store location.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn list(&self) -> Result<Vec<StoreLocation>> {
        Ok(self.stores.list().await?)
    }
}
