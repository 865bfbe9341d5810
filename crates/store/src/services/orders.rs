//! Order placement, history, and status operations.

use sqlx::PgPool;

use stonefire_core::{OrderId, OrderStatus, StoreId};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::db::stores::StoreRepository;
use crate::error::{AppError, Result};
use crate::models::order::{Cart, Order, OrderLine, PlacedOrder};
use crate::models::session::CurrentUser;

/// Service for order operations.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
    stores: StoreRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
            stores: StoreRepository::new(pool),
        }
    }

    /// Place an order for the session user.
    ///
    /// The cart must be non-empty and the store must exist; nothing is
    /// persisted otherwise. Placement is a single transaction.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` for an empty cart.
    /// Returns `AppError::NotFound` for an unknown store.
    pub async fn place(
        &self,
        session: &CurrentUser,
        store_id: StoreId,
        cart: &Cart,
    ) -> Result<PlacedOrder> {
        if cart.is_empty() {
            return Err(AppError::InvalidInput("the order has no items".to_owned()));
        }

        if !self.stores.exists(store_id).await? {
            return Err(AppError::NotFound(format!("store {store_id}")));
        }

        Ok(self.orders.place(&session.login, store_id, cart).await?)
    }

    /// Order-id history, scoped by role: customers see their own orders,
    /// drivers and managers see every order ordered by status.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn order_ids(&self, session: &CurrentUser) -> Result<Vec<OrderId>> {
        let ids = if session.role.sees_all_orders() {
            self.orders.all_ids().await?
        } else {
            self.orders.ids_for(&session.login).await?
        };
        Ok(ids)
    }

    /// The session user's five most recent order ids.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn recent_order_ids(&self, session: &CurrentUser) -> Result<Vec<OrderId>> {
        Ok(self.orders.recent_ids_for(&session.login, 5).await?)
    }

    /// Order header and line items for one order.
    ///
    /// A customer may only inspect their own orders; drivers and managers
    /// may inspect any.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` for an unknown order id.
    /// Returns `AppError::AccessDenied` when a customer asks for a
    /// different user's order.
    pub async fn order_info(
        &self,
        session: &CurrentUser,
        order_id: OrderId,
    ) -> Result<(Order, Vec<OrderLine>)> {
        let order = self
            .orders
            .header(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("order {order_id}")))?;

        if !session.role.sees_all_orders() && order.login != session.login {
            tracing::warn!(actor = %session.login, %order_id, "order detail denied");
            return Err(AppError::AccessDenied(
                "you may only view your own orders".to_owned(),
            ));
        }

        let lines = self.orders.lines(order_id).await?;
        Ok((order, lines))
    }

    /// Change an order's status. Driver or manager only.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` for customers; the status is left
    /// unchanged.
    /// Returns `AppError::NotFound` for an unknown order id.
    pub async fn update_status(
        &self,
        session: &CurrentUser,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<()> {
        if !session.role.can_update_order_status() {
            tracing::warn!(actor = %session.login, %order_id, "status update denied");
            return Err(AppError::AccessDenied(
                "only managers or drivers can update order status".to_owned(),
            ));
        }

        self.orders
            .set_status(order_id, status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => AppError::NotFound(format!("order {order_id}")),
                other => AppError::Repository(other),
            })
    }
}
