//! Baksho Admin - Back-office services.
//!
//! Services the admin frontend reads from: dashboard aggregates, catalog
//! and order management, and customer views. Everything here drives the
//! same mock repositories as the storefront, with the same documented
//! caveat: apart from order creation, mutation endpoints acknowledge
//! without persisting.
//!
//! Banner management has no service here because the storefront's
//! [`baksho_storefront::stores::BannerStore`] already exposes the full
//! CRUD surface over the shared collection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod dashboard;
pub mod orders;
pub mod users;

pub use catalog::ProductAdmin;
pub use dashboard::{DashboardService, DashboardStats, WeeklySalesPoint};
pub use orders::OrderAdmin;
pub use users::{CustomerView, UserAdmin};
