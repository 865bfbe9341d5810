//! Order repository for database operations.

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use stonefire_core::{Login, OrderId, OrderStatus, StoreId};

use super::RepositoryError;
use crate::models::order::{Cart, Order, OrderLine, PlacedOrder};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

fn order_from_row(row: &PgRow) -> Result<Order, RepositoryError> {
    let status: OrderStatus = row
        .try_get::<String, _>("order_status")?
        .parse()
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid order status: {e}")))?;

    Ok(Order {
        order_id: row.try_get("order_id")?,
        login: row.try_get("login")?,
        store_id: row.try_get("store_id")?,
        total_price: row.try_get("total_price")?,
        order_timestamp: row.try_get("order_timestamp")?,
        order_status: status,
    })
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist an order with its line items.
    ///
    /// The order id is allocated and the header inserted in one statement
    /// (`max + 1` computed inside the INSERT), and the line rows join it in
    /// the same transaction, so placement is all-or-nothing and two clients
    /// cannot read the same id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails; nothing
    /// is persisted in that case.
    pub async fn place(
        &self,
        login: &Login,
        store_id: StoreId,
        cart: &Cart,
    ) -> Result<PlacedOrder, RepositoryError> {
        let total = cart.total();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r"
            INSERT INTO FoodOrder (orderID, login, storeID, totalPrice, orderTimestamp, orderStatus)
            SELECT COALESCE(MAX(orderID), 0) + 1, $1, $2, $3, NOW(), $4
            FROM FoodOrder
            RETURNING orderID AS order_id
            ",
        )
        .bind(login)
        .bind(store_id)
        .bind(total)
        .bind(OrderStatus::Placed.to_string())
        .fetch_one(&mut *tx)
        .await?;

        let order_id: OrderId = row.try_get("order_id")?;

        for line in cart.lines() {
            sqlx::query(
                r"
                INSERT INTO ItemsInOrder (orderID, itemName, quantity)
                VALUES ($1, $2, $3)
                ",
            )
            .bind(order_id)
            .bind(&line.item_name)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(%login, %order_id, %total, "order placed");

        Ok(PlacedOrder {
            order_id,
            total,
        })
    }

    /// Every order id, ordered by status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn all_ids(&self) -> Result<Vec<OrderId>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT orderID AS order_id FROM FoodOrder ORDER BY orderStatus DESC, orderID",
        )
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|r| r.try_get("order_id").map_err(RepositoryError::from))
            .collect()
    }

    /// All order ids belonging to one login, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn ids_for(&self, login: &Login) -> Result<Vec<OrderId>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT orderID AS order_id
            FROM FoodOrder
            WHERE login = $1
            ORDER BY orderTimestamp DESC
            ",
        )
        .bind(login)
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|r| r.try_get("order_id").map_err(RepositoryError::from))
            .collect()
    }

    /// The most recent order ids belonging to one login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent_ids_for(
        &self,
        login: &Login,
        limit: i64,
    ) -> Result<Vec<OrderId>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT orderID AS order_id
            FROM FoodOrder
            WHERE login = $1
            ORDER BY orderTimestamp DESC
            LIMIT $2
            ",
        )
        .bind(login)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|r| r.try_get("order_id").map_err(RepositoryError::from))
            .collect()
    }

    /// Get an order header by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored status is invalid.
    pub async fn header(&self, order_id: OrderId) -> Result<Option<Order>, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT orderID AS order_id, login,
                   storeID AS store_id,
                   totalPrice AS total_price,
                   orderTimestamp AS order_timestamp,
                   orderStatus AS order_status
            FROM FoodOrder
            WHERE orderID = $1
            ",
        )
        .bind(order_id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(order_from_row).transpose()
    }

    /// Line items for an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn lines(&self, order_id: OrderId) -> Result<Vec<OrderLine>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT itemName AS item_name, quantity
            FROM ItemsInOrder
            WHERE orderID = $1
            ORDER BY itemName
            ",
        )
        .bind(order_id)
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                Ok(OrderLine {
                    item_name: r.try_get("item_name")?,
                    quantity: r.try_get("quantity")?,
                })
            })
            .collect()
    }

    /// Set the status of an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the order doesn't exist.
    pub async fn set_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE FoodOrder SET orderStatus = $1 WHERE orderID = $2")
            .bind(status.to_string())
            .bind(order_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tracing::info!(%order_id, %status, "order status updated");

        Ok(())
    }
}
