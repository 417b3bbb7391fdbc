//! Checkout: validate, price, create the order, clear the cart.

use thiserror::Error;
use tracing::instrument;

use crate::api::OrderApi;
use crate::api::types::{DeliveryAddress, NewOrder, Order, OrderItem};
use crate::models::cart::CartLine;
use crate::storage::StorageError;
use crate::stores::{CartStore, SessionStore};

/// Checkout form input.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub payment_method: String,
}

/// One offending checkout form field, for inline display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The form field that failed.
    pub field: &'static str,
    /// What to show next to it.
    pub message: String,
}

/// Errors from the checkout flow.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Nothing in the cart to check out.
    #[error("cart is empty")]
    EmptyCart,

    /// One or more form fields failed validation.
    #[error("checkout validation failed")]
    Invalid(Vec<FieldError>),

    /// Clearing the cart after order creation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Place an order from the current cart state.
///
/// Validates the delivery address and payment method (collecting every
/// offending field, not just the first), snapshots the cart lines into
/// order items, prices the order from the cart's derived totals, creates
/// it through the order repository, and clears the cart.
///
/// The signed-in user (if any) owns the order; an anonymous cart checks
/// out as a guest order with no user id.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] or [`CheckoutError::Invalid`]
/// before anything is created; [`CheckoutError::Storage`] if the cart
/// cannot be cleared after the order exists.
#[instrument(skip_all)]
pub async fn place_order(
    cart: &mut CartStore,
    orders: &mut OrderApi,
    session: &SessionStore,
    request: CheckoutRequest,
) -> Result<Order, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    validate(&request)?;

    let totals = cart.totals();
    let items: Vec<OrderItem> = cart.lines().iter().map(order_item).collect();

    let order = orders
        .create(NewOrder {
            user_id: session.user_id(),
            email: session.current().map(|s| s.email.clone()),
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            delivery_fee: totals.delivery_fee,
            total: totals.grand_total,
            delivery_address: DeliveryAddress {
                street: request.street,
                city: request.city,
                state: request.state,
                zip: request.zip,
            },
            payment_method: request.payment_method,
        })
        .await;

    cart.clear()?;
    Ok(order)
}

fn order_item(line: &CartLine) -> OrderItem {
    OrderItem {
        product_id: line.product_id,
        name: line.name.clone(),
        quantity: line.quantity,
        price: line.price,
        image: line.image.clone(),
    }
}

fn validate(request: &CheckoutRequest) -> Result<(), CheckoutError> {
    let mut errors = Vec::new();
    let mut require = |field: &'static str, value: &str| {
        if value.trim().is_empty() {
            errors.push(FieldError {
                field,
                message: format!("{field} is required"),
            });
        }
    };

    require("street", &request.street);
    require("city", &request.city);
    require("state", &request.state);
    require("zip", &request.zip);
    require("payment method", &request.payment_method);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CheckoutError::Invalid(errors))
    }
}
