//! Cart and checkout commands.
//!
//! # Usage
//!
//! ```bash
//! baksho cart add 2 --quantity 3
//! baksho cart update 2 1
//! baksho cart show
//! baksho checkout --street "42 Maple Street" --city Springfield \
//!     --state IL --zip 62704
//! ```
//!
//! With a signed-in session, `checkout` falls back to the account's
//! default address for any address flag left unset.

use baksho_core::ProductId;
use baksho_storefront::services::checkout::{CheckoutError, CheckoutRequest};
use baksho_storefront::state::AppState;

/// Add a product to the cart.
#[allow(clippy::print_stdout)]
pub async fn add(
    state: &mut AppState,
    product_id: ProductId,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(product) = state.products().get(product_id).await else {
        return Err(format!("no product with id {product_id}").into());
    };
    if !product.in_stock {
        return Err(format!("{} is out of stock", product.name).into());
    }

    state.cart_mut().add(&product, quantity)?;
    println!(
        "added {quantity} x {} ({} items in cart)",
        product.name,
        state.cart().count()
    );
    Ok(())
}

/// Remove a product's line from the cart.
#[allow(clippy::print_stdout)]
pub fn remove(
    state: &mut AppState,
    product_id: ProductId,
) -> Result<(), Box<dyn std::error::Error>> {
    state.cart_mut().remove(product_id)?;
    println!("removed ({} items in cart)", state.cart().count());
    Ok(())
}

/// Set a line's quantity exactly.
#[allow(clippy::print_stdout)]
pub fn update(
    state: &mut AppState,
    product_id: ProductId,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    state.cart_mut().update_quantity(product_id, quantity)?;
    println!("updated ({} items in cart)", state.cart().count());
    Ok(())
}

/// Print the cart and its derived totals.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let cart = state.cart();
    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    for line in cart.lines() {
        println!(
            "{:>3} x {:<22} {:>8} each  {:>9}",
            line.quantity,
            line.name,
            line.price.to_string(),
            line.line_total().to_string()
        );
    }
    let totals = cart.totals();
    println!("  subtotal:     {:>9}", totals.subtotal.to_string());
    println!("  tax:          {:>9}", totals.tax.to_string());
    println!("  delivery fee: {:>9}", totals.delivery_fee.to_string());
    println!("  total:        {:>9}", totals.grand_total.to_string());
    Ok(())
}

/// Empty the cart.
#[allow(clippy::print_stdout)]
pub fn clear(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.cart_mut().clear()?;
    println!("cart cleared");
    Ok(())
}

/// Check out the current cart.
#[allow(clippy::print_stdout)]
pub async fn checkout(
    state: &mut AppState,
    street: Option<String>,
    city: Option<String>,
    region: Option<String>,
    zip: Option<String>,
    payment: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let fallback = state
        .session()
        .current()
        .and_then(|s| s.default_address().cloned());
    let from_fallback = |explicit: Option<String>, stored: Option<&str>| {
        explicit.unwrap_or_else(|| stored.unwrap_or_default().to_owned())
    };

    let request = CheckoutRequest {
        street: from_fallback(street, fallback.as_ref().map(|a| a.street.as_str())),
        city: from_fallback(city, fallback.as_ref().map(|a| a.city.as_str())),
        state: from_fallback(region, fallback.as_ref().map(|a| a.state.as_str())),
        zip: from_fallback(zip, fallback.as_ref().map(|a| a.zip.as_str())),
        payment_method: payment,
    };

    match state.place_order(request).await {
        Ok(order) => {
            println!("order {} placed", order.id);
            println!("  items:     {}", order.items.len());
            println!("  total:     {}", order.total);
            println!("  delivers:  {}", order.estimated_delivery);
            Ok(())
        }
        Err(baksho_storefront::error::StorefrontError::Checkout(CheckoutError::Invalid(
            fields,
        ))) => {
            for field in fields {
                println!("  {}: {}", field.field, field.message);
            }
            Err("checkout validation failed".into())
        }
        Err(e) => Err(e.into()),
    }
}
