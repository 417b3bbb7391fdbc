//! Baksho Storefront library.
//!
//! The shopper-facing engine of the Baksho grocery store: a mock backend
//! with simulated latency, durable client-side state stores, and the
//! checkout pricing pipeline. The presentation layer lives elsewhere and
//! consumes this crate; nothing here renders.
//!
//! # Architecture
//!
//! - [`api`] - Mock product/order/user repositories standing in for a
//!   remote backend (in-memory collections + artificial latency)
//! - [`stores`] - Cart, session, banner, language, and UI-visibility
//!   state containers with JSON snapshot persistence
//! - [`storage`] - The `localStorage`-style key/value snapshot layer
//! - [`services`] - Cross-store flows (checkout)
//! - [`state`] - [`state::AppState`] wiring config, storage, repositories,
//!   and stores together
//!
//! # Persisted keys
//!
//! All durable state is JSON under four storage keys:
//!
//! - `cart` - array of cart lines
//! - `user` - the active session (never contains a password)
//! - `language` - selected locale code
//! - `baksho_banners` - the full banner collection

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;
