//! Cart behavior across mutations and simulated page refreshes.

#![allow(clippy::unwrap_used)]

use baksho_core::{Price, ProductId};
use baksho_integration_tests::{fixture_product, fresh_state, reload_state};
use rust_decimal::Decimal;

#[test]
fn repeated_adds_accumulate_into_a_single_line() {
    let (_, mut state) = fresh_state();
    let apple = fixture_product(1, 249);

    for quantity in [1, 2, 5] {
        state.cart_mut().add(&apple, quantity).unwrap();
    }

    assert_eq!(state.cart().lines().len(), 1);
    assert_eq!(state.cart().count(), 8);
}

#[test]
fn zero_quantity_update_equals_removal() {
    let (_, mut state) = fresh_state();
    let apple = fixture_product(1, 249);
    let bread = fixture_product(2, 449);

    state.cart_mut().add(&apple, 2).unwrap();
    state.cart_mut().add(&bread, 1).unwrap();

    state.cart_mut().update_quantity(ProductId::new(1), 0).unwrap();
    state.cart_mut().remove(ProductId::new(2)).unwrap();

    assert!(state.cart().is_empty());
}

#[test]
fn totals_match_the_worked_example() {
    let (_, mut state) = fresh_state();
    state.cart_mut().add(&fixture_product(1, 399), 2).unwrap();
    state.cart_mut().add(&fixture_product(2, 149), 1).unwrap();

    let cart = state.cart();
    assert_eq!(cart.subtotal(), Price::new(Decimal::new(947, 2)));
    assert_eq!(cart.tax(), Price::new(Decimal::new(7576, 4)));
    assert_eq!(cart.delivery_fee(), Price::from_cents(499));
    assert_eq!(cart.grand_total().to_string(), "$15.22");
}

#[test]
fn delivery_fee_waives_only_strictly_above_fifty() {
    let (_, mut state) = fresh_state();
    state.cart_mut().add(&fixture_product(1, 2500), 2).unwrap();
    // Exactly $50.00
    assert_eq!(state.cart().delivery_fee(), Price::from_cents(499));

    state.cart_mut().add(&fixture_product(2, 1), 1).unwrap();
    assert_eq!(state.cart().delivery_fee(), Price::ZERO);
    assert_eq!(
        state.cart().grand_total(),
        state.cart().subtotal() + state.cart().tax()
    );
}

#[test]
fn cart_survives_a_page_refresh() {
    let (storage, mut state) = fresh_state();
    state.cart_mut().add(&fixture_product(1, 399), 2).unwrap();
    state.cart_mut().add(&fixture_product(2, 149), 3).unwrap();
    let lines = state.cart().lines().to_vec();
    drop(state);

    let reloaded = reload_state(&storage);
    assert_eq!(reloaded.cart().lines(), lines.as_slice());
    assert_eq!(reloaded.cart().count(), 5);
}

#[test]
fn corrupted_cart_snapshot_degrades_to_empty() {
    use baksho_storefront::storage::{Storage, keys};

    let (storage, state) = fresh_state();
    drop(state);
    storage.set(keys::CART, "[{\"broken\":").unwrap();

    let reloaded = reload_state(&storage);
    assert!(reloaded.cart().is_empty());
}
