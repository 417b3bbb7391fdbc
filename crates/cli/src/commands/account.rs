//! Session, order history, and language commands.
//!
//! # Usage
//!
//! ```bash
//! baksho auth login -e demo@example.com -p password123
//! baksho auth whoami
//! baksho orders list
//! baksho lang set BN
//! ```

use baksho_core::{Language, OrderId};
use baksho_storefront::state::AppState;
use baksho_storefront::stores::Registration;

/// Sign in and persist the session.
#[allow(clippy::print_stdout)]
pub async fn login(
    state: &mut AppState,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    state.login(email, password).await?;
    let session = state.session().current().ok_or("session missing")?;
    println!("signed in as {} <{}>", session.display_name(), session.email);
    Ok(())
}

/// Register a new account and sign in.
#[allow(clippy::print_stdout)]
pub async fn register(
    state: &mut AppState,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
    phone: String,
) -> Result<(), Box<dyn std::error::Error>> {
    state
        .register(Registration {
            email,
            password,
            first_name,
            last_name,
            phone,
        })
        .await?;
    let session = state.session().current().ok_or("session missing")?;
    println!("welcome, {}", session.display_name());
    Ok(())
}

/// Sign out and clear the persisted session.
#[allow(clippy::print_stdout)]
pub fn logout(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    state.session_mut().logout()?;
    println!("signed out");
    Ok(())
}

/// Print the active session.
#[allow(clippy::print_stdout)]
pub fn whoami(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    match state.session().current() {
        Some(session) => {
            println!("{} <{}>", session.display_name(), session.email);
            if session.is_admin {
                println!("  role: admin");
            }
            for address in &session.addresses {
                let default = if address.is_default { " (default)" } else { "" };
                println!(
                    "  {}: {}, {}, {} {}{default}",
                    address.kind, address.street, address.city, address.state, address.zip
                );
            }
        }
        None => println!("not signed in"),
    }
    Ok(())
}

/// List the signed-in user's orders.
#[allow(clippy::print_stdout)]
pub async fn orders(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let Some(user_id) = state.session().user_id() else {
        return Err("not signed in".into());
    };

    let orders = state.orders().list_for_user(user_id).await;
    if orders.is_empty() {
        println!("no orders yet");
        return Ok(());
    }
    for order in orders {
        println!(
            "{}  {}  {:<11} {:>9}  {} items",
            order.id,
            order.date.format("%Y-%m-%d"),
            order.status.to_string(),
            order.total.to_string(),
            order.items.len()
        );
    }
    Ok(())
}

/// Show one order in detail.
#[allow(clippy::print_stdout)]
pub async fn order(state: &AppState, id: &OrderId) -> Result<(), Box<dyn std::error::Error>> {
    let Some(order) = state.orders().get(id).await else {
        return Err(format!("no order {id}").into());
    };

    println!("{} - {}", order.id, order.status);
    for item in &order.items {
        println!(
            "  {:>3} x {:<22} {:>8}",
            item.quantity,
            item.name,
            item.price.to_string()
        );
    }
    println!("  subtotal:     {:>9}", order.subtotal.to_string());
    println!("  tax:          {:>9}", order.tax.to_string());
    println!("  delivery fee: {:>9}", order.delivery_fee.to_string());
    println!("  total:        {:>9}", order.total.to_string());
    println!(
        "  ship to:      {}, {}, {} {}",
        order.delivery_address.street,
        order.delivery_address.city,
        order.delivery_address.state,
        order.delivery_address.zip
    );
    println!("  estimated:    {}", order.estimated_delivery);
    Ok(())
}

/// Print the selected language.
#[allow(clippy::print_stdout)]
pub fn language(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", state.language().current());
    Ok(())
}

/// Select a language.
#[allow(clippy::print_stdout)]
pub fn set_language(
    state: &mut AppState,
    code: Language,
) -> Result<(), Box<dyn std::error::Error>> {
    state.language_mut().set(code)?;
    println!(
        "language set to {} ({})",
        code,
        state.language().translate("nav.home")
    );
    Ok(())
}
