//! Product browsing commands.
//!
//! # Usage
//!
//! ```bash
//! baksho products list --category dairy --sort price-low
//! baksho products list --search banana
//! baksho products show 17
//! ```

use baksho_core::{Category, ProductId, SortKey};
use baksho_storefront::api::types::ProductQuery;
use baksho_storefront::state::AppState;

/// List catalog products.
#[allow(clippy::print_stdout)]
pub async fn list(
    state: &AppState,
    page: usize,
    limit: usize,
    search: Option<String>,
    category: Option<Category>,
    sort: SortKey,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = state
        .products()
        .list(&ProductQuery {
            page,
            limit,
            search,
            category,
            sort,
        })
        .await;

    for product in &result.data {
        let stock = if product.in_stock { "" } else { "  [out of stock]" };
        println!(
            "{:>4}  {:<22} {:<12} {:>8}  {}{}",
            product.id.as_i32(),
            product.name,
            product.category.to_string(),
            product.price.to_string(),
            product.unit,
            stock
        );
    }
    println!(
        "page {}/{} ({} products)",
        result.meta.page, result.meta.total_pages, result.meta.total
    );
    Ok(())
}

/// Show one product in detail.
#[allow(clippy::print_stdout)]
pub async fn show(state: &AppState, id: ProductId) -> Result<(), Box<dyn std::error::Error>> {
    let Some(product) = state.products().get(id).await else {
        return Err(format!("no product with id {id}").into());
    };

    println!("{} ({})", product.name, product.category);
    println!("  price:    {} {}", product.price, product.unit);
    if product.discount > 0 {
        println!(
            "  was:      {} ({}% off)",
            product.original_price, product.discount
        );
    }
    println!("  rating:   {} ({} reviews)", product.rating, product.reviews);
    println!("  in stock: {}", if product.in_stock { "yes" } else { "no" });
    println!("  {}", product.description);
    Ok(())
}
