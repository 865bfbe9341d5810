//! Store location repository.

use sqlx::{PgPool, Row};

use stonefire_core::StoreId;

use super::RepositoryError;
use crate::models::store::StoreLocation;

/// Repository for store location reads. Locations are read-only here.
pub struct StoreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StoreRepository<'a> {
    /// Create a new store repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every store location.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<StoreLocation>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT DISTINCT storeID AS store_id, address, city, state
            FROM Store
            ORDER BY store_id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                Ok(StoreLocation {
                    store_id: r.try_get("store_id")?,
                    address: r.try_get("address")?,
                    city: r.try_get("city")?,
                    state: r.try_get("state")?,
                })
            })
            .collect()
    }

    /// Whether a store with this id exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn exists(&self, store_id: StoreId) -> Result<bool, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM Store WHERE storeID = $1")
            .bind(store_id)
            .fetch_one(self.pool)
            .await?;

        let count: i64 = row.try_get("n")?;
        Ok(count > 0)
    }
}
