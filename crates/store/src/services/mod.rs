//! Domain operation services.
//!
//! Each service is an isolated unit of work over the shared pool; the
//! console and TUI shells both drive these and render the results. All
//! role-gated operations authorize from the [`CurrentUser`] session value
//! they are handed.
//!
//! [`CurrentUser`]: crate::models::CurrentUser

pub mod accounts;
pub mod auth;
pub mod catalog;
pub mod orders;
pub mod stores;

pub use accounts::AccountService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use orders::OrderService;
pub use stores::StoreService;
