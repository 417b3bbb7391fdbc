//! Cart domain types.

use serde::{Deserialize, Serialize};

use baksho_core::{Category, Price, ProductId};

use crate::api::types::Product;

/// One product entry in the shopping cart.
///
/// Product display fields are copied at add-time, so a line keeps the
/// name and price the shopper saw even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Id of the product this line snapshots.
    pub product_id: ProductId,
    /// Product name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Product image at add-time.
    pub image: String,
    /// Product category at add-time.
    pub category: Category,
    /// Display unit ("per lb", "dozen", ...).
    pub unit: String,
    /// Number of units in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Snapshot a product into a new cart line.
    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category,
            unit: product.unit.clone(),
            quantity,
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price * self.quantity
    }
}

/// The derived money amounts for a cart state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Price,
    /// Sales tax on the subtotal.
    pub tax: Price,
    /// Flat delivery fee, waived above the free-delivery threshold.
    pub delivery_fee: Price,
    /// `subtotal + tax + delivery_fee`.
    pub grand_total: Price,
}
