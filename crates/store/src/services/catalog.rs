//! Menu browsing and administration operations.

use sqlx::PgPool;

use stonefire_core::Price;

use crate::db::RepositoryError;
use crate::db::menu::MenuRepository;
use crate::error::{AppError, Result};
use crate::models::item::{Item, MenuFilter};
use crate::models::session::CurrentUser;

/// Service for menu browsing and manager-gated menu changes.
pub struct CatalogService<'a> {
    menu: MenuRepository<'a>,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            menu: MenuRepository::new(pool),
        }
    }

    /// Browse the menu. Open to every role.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn browse(&self, filter: &MenuFilter) -> Result<Vec<Item>> {
        Ok(self.menu.list(filter).await?)
    }

    /// Price of an item by exact name, `None` if unknown.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Repository` if the query fails.
    pub async fn price_of(&self, item_name: &str) -> Result<Option<Price>> {
        Ok(self.menu.price_of(item_name).await?)
    }

    /// Add a menu item. Manager only.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` for non-managers; no mutation happens.
    pub async fn add_item(&self, session: &CurrentUser, item: &Item) -> Result<()> {
        self.require_manager(session)?;

        self.menu.insert(item).await?;
        tracing::info!(actor = %session.login, item = %item.name, "menu item added");
        Ok(())
    }

    /// Replace an existing menu item, keyed by its current name. Manager only.
    ///
    /// # Errors
    ///
    /// Returns `AppError::AccessDenied` for non-managers.
    /// Returns `AppError::NotFound` if no item has the given name.
    pub async fn update_item(
        &self,
        session: &CurrentUser,
        existing_name: &str,
        item: &Item,
    ) -> Result<()> {
        self.require_manager(session)?;

        self.menu
            .update(existing_name, item)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    AppError::NotFound(format!("menu item {existing_name}"))
                }
                other => AppError::Repository(other),
            })?;

        tracing::info!(actor = %session.login, item = %item.name, "menu item updated");
        Ok(())
    }

    fn require_manager(&self, session: &CurrentUser) -> Result<()> {
        if session.role.is_manager() {
            Ok(())
        } else {
            tracing::warn!(actor = %session.login, "menu update denied");
            Err(AppError::AccessDenied(
                "only managers can update the menu".to_owned(),
            ))
        }
    }
}
