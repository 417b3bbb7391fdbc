//! Record and request/response types for the mock backend.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use baksho_core::{Category, Email, OrderId, OrderStatus, Price, ProductId, SortKey, UserId};

use crate::models::user::Address;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: Category,
    /// Current selling price.
    pub price: Price,
    /// Pre-markdown price; equals `price` when not on sale.
    pub original_price: Price,
    /// Advertised percent off, 0-100.
    pub discount: u8,
    /// Average review rating, 0.0-5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Product image URI.
    pub image: String,
    /// Long-form description.
    pub description: String,
    /// Whether the product can currently be added to a cart.
    pub in_stock: bool,
    /// Display unit ("per lb", "dozen", ...).
    pub unit: String,
}

/// Product listing request.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// 1-based page number; 0 is treated as 1.
    pub page: usize,
    /// Page size; 0 is treated as 1.
    pub limit: usize,
    /// Case-insensitive substring match on name or id.
    pub search: Option<String>,
    /// Exact category match.
    pub category: Option<Category>,
    /// Sort order; defaults to newest (descending id).
    pub sort: SortKey,
}

impl ProductQuery {
    /// Default page size for product listings.
    pub const DEFAULT_LIMIT: usize = 12;

    /// First page with the default page size and no filters.
    #[must_use]
    pub fn first_page() -> Self {
        Self {
            page: 1,
            limit: Self::DEFAULT_LIMIT,
            ..Self::default()
        }
    }
}

/// Input for the synthesized product create call.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub original_price: Price,
    pub image: String,
    pub description: String,
    pub in_stock: bool,
    pub unit: String,
}

/// Partial product edit; `None` fields keep the current value in the
/// synthesized response.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<Price>,
    pub original_price: Option<Price>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub in_stock: Option<bool>,
    pub unit: Option<String>,
}

/// Acknowledgement for the synthesized product delete call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAck {
    /// Id the caller asked to delete.
    pub id: ProductId,
    /// Always `true`; the mock layer acknowledges unconditionally.
    pub deleted: bool,
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order number in the `ORD-YYYY-NNN` format.
    pub id: OrderId,
    /// Owning user; `None` for guest checkout.
    pub user_id: Option<UserId>,
    /// Customer email at checkout time.
    pub email: Option<Email>,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Line snapshot at checkout time.
    pub items: Vec<OrderItem>,
    /// Sum of item line totals.
    pub subtotal: Price,
    /// Sales tax charged.
    pub tax: Price,
    /// Delivery fee charged.
    pub delivery_fee: Price,
    /// `subtotal + tax + delivery_fee`, computed by the caller; the mock
    /// layer does not re-validate it.
    pub total: Price,
    /// Where the order ships.
    pub delivery_address: DeliveryAddress,
    /// Payment method label the shopper picked.
    pub payment_method: String,
    /// Expected delivery date.
    pub estimated_delivery: NaiveDate,
}

/// One item on an order, snapshotted from a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Price,
    pub image: String,
}

/// Shipping destination captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl From<&Address> for DeliveryAddress {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            zip: address.zip.clone(),
        }
    }
}

/// Input for order creation; the id, date, status, and delivery estimate
/// are assigned by the repository.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<UserId>,
    pub email: Option<Email>,
    pub items: Vec<OrderItem>,
    pub subtotal: Price,
    pub tax: Price,
    pub delivery_fee: Price,
    pub total: Price,
    pub delivery_address: DeliveryAddress,
    pub payment_method: String,
}

/// Order listing request.
#[derive(Debug, Clone, Default)]
pub struct OrderQuery {
    /// 1-based page number; 0 is treated as 1.
    pub page: usize,
    /// Page size; 0 is treated as 1.
    pub limit: usize,
    /// Exact status match.
    pub status: Option<OrderStatus>,
    /// Case-insensitive substring match on order id or customer email.
    pub search: Option<String>,
}

/// Acknowledgement for the order status update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusAck {
    /// Order the caller addressed.
    pub id: OrderId,
    /// Status the caller asked for.
    pub status: OrderStatus,
    /// When the mock layer acknowledged the request.
    pub acknowledged_at: DateTime<Utc>,
}

/// A row in the mock user collection.
///
/// Carries the plaintext mock password: this collection stands in for a
/// backend that would never ship with the client. The persisted
/// [`crate::models::UserSession`] type has no password field, so the
/// credential cannot reach a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub is_admin: bool,
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
}

/// Input for user registration.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
