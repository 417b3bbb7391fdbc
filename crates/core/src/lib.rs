//! Baksho Core - Shared types library.
//!
//! This crate provides common types used across all Baksho components:
//! - `storefront` - Shopper-facing cart, session, and catalog engine
//! - `admin` - Back-office services (dashboard, catalog and order management)
//! - `cli` - Command-line demo and management tools
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! simulated network layer. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and
//!   the status/category/locale enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
