//! Stonefire Core - Shared types library.
//!
//! This crate provides common types used across all Stonefire components:
//! - `store` - Console ordering client and domain services
//! - `tui` - Terminal GUI shell over the same services
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access. This
//! keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, logins, roles, prices,
//!   and order statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
