//! Menu repository for database operations.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stonefire_core::Price;

use super::RepositoryError;
use crate::models::item::{Item, MenuFilter, PriceOrder};

/// Repository for menu item database operations.
pub struct MenuRepository<'a> {
    pool: &'a PgPool,
}

fn item_from_row(row: &PgRow) -> Result<Item, RepositoryError> {
    Ok(Item {
        name: row.try_get("name")?,
        ingredients: row.try_get("ingredients")?,
        type_of_item: row.try_get("type_of_item")?,
        price: row.try_get("price")?,
        description: row.try_get("description")?,
    })
}

const ITEM_COLUMNS: &str = r"
    itemName AS name,
    ingredients,
    typeOfItem AS type_of_item,
    price,
    description
";

impl<'a> MenuRepository<'a> {
    /// Create a new menu repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List menu items according to a filter.
    ///
    /// The category comparison is case-insensitive on a trimmed value; the
    /// price bound is inclusive. Sort direction comes from a fixed enum, so
    /// no user text reaches the ORDER BY clause.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, filter: &MenuFilter) -> Result<Vec<Item>, RepositoryError> {
        let rows = match filter {
            MenuFilter::All => {
                sqlx::query(&format!(
                    "SELECT {ITEM_COLUMNS} FROM Items ORDER BY itemName"
                ))
                .fetch_all(self.pool)
                .await?
            }
            MenuFilter::Category(category) => {
                sqlx::query(&format!(
                    "SELECT {ITEM_COLUMNS} FROM Items \
                     WHERE LOWER(typeOfItem) = LOWER($1) ORDER BY itemName"
                ))
                .bind(category.trim())
                .fetch_all(self.pool)
                .await?
            }
            MenuFilter::MaxPrice(limit) => {
                sqlx::query(&format!(
                    "SELECT {ITEM_COLUMNS} FROM Items WHERE price <= $1 ORDER BY itemName"
                ))
                .bind(limit)
                .fetch_all(self.pool)
                .await?
            }
            MenuFilter::ByPrice(order) => {
                // The tiebreaker follows the direction so that ascending and
                // descending listings are exact reverses of each other.
                let direction = match order {
                    PriceOrder::LowestFirst => "ASC",
                    PriceOrder::HighestFirst => "DESC",
                };
                sqlx::query(&format!(
                    "SELECT {ITEM_COLUMNS} FROM Items \
                     ORDER BY price {direction}, itemName {direction}"
                ))
                .fetch_all(self.pool)
                .await?
            }
        };

        rows.iter().map(item_from_row).collect()
    }

    /// Look up the price of an item by exact name.
    ///
    /// Returns `None` for an unknown item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn price_of(&self, item_name: &str) -> Result<Option<Price>, RepositoryError> {
        let row = sqlx::query("SELECT price FROM Items WHERE itemName = $1")
            .bind(item_name)
            .fetch_optional(self.pool)
            .await?;

        match row {
            Some(r) => Ok(Some(r.try_get("price")?)),
            None => Ok(None),
        }
    }

    /// Insert a new menu item.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the item name already exists.
    pub async fn insert(&self, item: &Item) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO Items (itemName, ingredients, typeOfItem, price, description)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&item.name)
        .bind(&item.ingredients)
        .bind(&item.type_of_item)
        .bind(item.price)
        .bind(&item.description)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("item already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Replace an existing menu item, keyed by its current name.
    ///
    /// The item may be renamed as part of the update.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no item has the given name.
    /// Returns `RepositoryError::Conflict` if renaming collides.
    pub async fn update(&self, existing_name: &str, item: &Item) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE Items
            SET itemName = $1, ingredients = $2, typeOfItem = $3, price = $4, description = $5
            WHERE itemName = $6
            ",
        )
        .bind(&item.name)
        .bind(&item.ingredients)
        .bind(&item.type_of_item)
        .bind(item.price)
        .bind(&item.description)
        .bind(existing_name)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("item already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
