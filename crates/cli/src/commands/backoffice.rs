//! Back-office commands: dashboard aggregates and banner management.
//!
//! # Usage
//!
//! ```bash
//! baksho dashboard
//! baksho banners list --all
//! baksho banners toggle <banner-id>
//! ```

use baksho_admin::DashboardService;
use baksho_core::BannerId;
use baksho_storefront::state::AppState;

/// Print the dashboard aggregates.
#[allow(clippy::print_stdout)]
pub async fn dashboard(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let stats = DashboardService::new(state.products(), state.orders(), state.users())
        .stats()
        .await;

    println!("orders:    {}", stats.orders);
    println!("revenue:   {}", stats.revenue);
    println!("customers: {}", stats.customers);
    println!("products:  {}", stats.products);

    println!("weekly sales:");
    for point in &stats.weekly_sales {
        println!("  {}  {:>10}", point.day, point.total.to_string());
    }

    println!("recent orders:");
    for order in &stats.recent_orders {
        println!(
            "  {}  {:<11} {:>9}",
            order.id,
            order.status.to_string(),
            order.total.to_string()
        );
    }
    Ok(())
}

/// List banners.
#[allow(clippy::print_stdout)]
pub fn banners(state: &AppState, all: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = state.banners();
    let banners: Vec<_> = if all {
        store.all().iter().collect()
    } else {
        store.active()
    };

    for banner in banners {
        let status = if banner.active { "active" } else { "inactive" };
        println!(
            "{}  [{}] {:<11} p{}  {} - {}",
            banner.id, status, banner.kind, banner.priority, banner.title, banner.subtitle
        );
    }
    Ok(())
}

/// Flip a banner's active flag.
#[allow(clippy::print_stdout)]
pub fn toggle_banner(
    state: &mut AppState,
    id: BannerId,
) -> Result<(), Box<dyn std::error::Error>> {
    if state.banners_mut().toggle(id)? {
        println!("banner {id} toggled");
        Ok(())
    } else {
        Err(format!("no banner with id {id}").into())
    }
}
