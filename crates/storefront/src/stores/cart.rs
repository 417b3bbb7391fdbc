//! The shopping cart store.
//!
//! Single source of truth for cart lines. Totals are derived on demand
//! from the current lines, never cached; every mutation snapshots the
//! full line list to the `cart` storage key.

use std::sync::Arc;

use rust_decimal::Decimal;

use baksho_core::{Price, ProductId};

use crate::api::types::Product;
use crate::models::cart::{CartLine, CartTotals};
use crate::storage::{self, Storage, StorageError, keys};

/// Sales tax rate applied to the subtotal (8%).
const TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);

/// Flat delivery fee in effect below the free-delivery threshold.
const DELIVERY_FEE: Decimal = Decimal::from_parts(499, 0, 0, false, 2);

/// Subtotal above which delivery is free. The comparison is strict:
/// a subtotal of exactly $50.00 still pays the fee.
const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// The shopping cart.
///
/// Holds at most one line per product id. Quantities are not bounded
/// above at this layer, and `add` does not validate a zero quantity;
/// callers pass at least 1.
pub struct CartStore {
    storage: Arc<dyn Storage>,
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Build the cart, rehydrating any persisted snapshot.
    ///
    /// A missing or unreadable snapshot yields an empty cart.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let lines = storage::read_json(storage.as_ref(), keys::CART).unwrap_or_default();
        Self { storage, lines }
    }

    /// Add a product to the cart.
    ///
    /// If a line for the product already exists its quantity is
    /// incremented by `quantity`; otherwise a new line snapshots the
    /// product.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), StorageError> {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine::from_product(product, quantity)),
        }
        self.persist()
    }

    /// Remove a product's line. Removing an absent product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn remove(&mut self, product_id: ProductId) -> Result<(), StorageError> {
        self.lines.retain(|line| line.product_id != product_id);
        self.persist()
    }

    /// Set a line's quantity exactly (not incrementally).
    ///
    /// A quantity of zero delegates to [`Self::remove`]. Negative
    /// quantities are unrepresentable.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn update_quantity(
        &mut self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), StorageError> {
        if quantity == 0 {
            return self.remove(product_id);
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
        self.persist()
    }

    /// Empty the cart. Called after a successful checkout.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.lines.clear();
        self.persist()
    }

    /// The current cart lines.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sales tax on the current subtotal.
    #[must_use]
    pub fn tax(&self) -> Price {
        Price::new(self.subtotal().amount() * TAX_RATE)
    }

    /// Delivery fee for the current subtotal: waived strictly above the
    /// free-delivery threshold, flat otherwise.
    #[must_use]
    pub fn delivery_fee(&self) -> Price {
        if self.subtotal().amount() > FREE_DELIVERY_THRESHOLD {
            Price::ZERO
        } else {
            Price::new(DELIVERY_FEE)
        }
    }

    /// `subtotal + tax + delivery_fee`.
    #[must_use]
    pub fn grand_total(&self) -> Price {
        self.subtotal() + self.tax() + self.delivery_fee()
    }

    /// All derived amounts at once, for checkout and display.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            tax: self.tax(),
            delivery_fee: self.delivery_fee(),
            grand_total: self.grand_total(),
        }
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::write_json(self.storage.as_ref(), keys::CART, &self.lines)
    }
}
