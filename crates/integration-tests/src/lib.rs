//! Shared helpers for Baksho integration tests.
//!
//! Tests drive the real stores and mock repositories over in-memory
//! storage with simulated latency disabled, so a whole checkout flow
//! runs in microseconds while exercising the same code paths as the
//! file-backed build.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use baksho_core::Price;
use baksho_storefront::api::types::Product;
use baksho_storefront::state::AppState;
use baksho_storefront::storage::{MemoryStorage, Storage};

/// A fresh app state over shared in-memory storage.
///
/// Returns the storage handle too, so a test can build a second state
/// over the same storage to simulate a page refresh.
#[must_use]
pub fn fresh_state() -> (Arc<MemoryStorage>, AppState) {
    let storage = Arc::new(MemoryStorage::new());
    let state = AppState::for_tests(Arc::clone(&storage) as Arc<dyn Storage>);
    (storage, state)
}

/// A second state over existing storage: the "page refresh".
#[must_use]
pub fn reload_state(storage: &Arc<MemoryStorage>) -> AppState {
    AppState::for_tests(Arc::clone(storage) as Arc<dyn Storage>)
}

/// A minimal in-stock product for cart fixtures.
#[must_use]
pub fn fixture_product(id: i32, cents: i64) -> Product {
    let price = Price::from_cents(cents);
    Product {
        id: baksho_core::ProductId::new(id),
        name: format!("Fixture {id}"),
        category: baksho_core::Category::Pantry,
        price,
        original_price: price,
        discount: 0,
        rating: 4.0,
        reviews: 1,
        image: format!("/images/products/fixture-{id}.jpg"),
        description: String::new(),
        in_stock: true,
        unit: "each".to_owned(),
    }
}
