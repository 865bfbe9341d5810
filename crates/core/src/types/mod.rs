//! Core types for Stonefire.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod login;
pub mod price;
pub mod role;
pub mod status;

pub use id::*;
pub use login::{Login, LoginError};
pub use price::{Price, PriceError};
pub use role::Role;
pub use status::OrderStatus;
