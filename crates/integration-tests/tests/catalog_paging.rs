//! Listing, filtering, and pagination against the mock catalog.

#![allow(clippy::unwrap_used)]

use baksho_core::SortKey;
use baksho_integration_tests::fixture_product;
use baksho_storefront::api::types::ProductQuery;
use baksho_storefront::api::{Latency, ProductApi};

#[tokio::test]
async fn page_two_of_a_23_item_set_has_ten_items_and_three_pages() {
    let products = (1..=23).map(|id| fixture_product(id, 100 * i64::from(id))).collect();
    let api = ProductApi::with_products(products, Latency::none());

    let page = api
        .list(&ProductQuery {
            page: 2,
            limit: 10,
            ..ProductQuery::default()
        })
        .await;

    assert_eq!(page.data.len(), 10);
    assert_eq!(page.meta.page, 2);
    assert_eq!(page.meta.limit, 10);
    assert_eq!(page.meta.total, 23);
    assert_eq!(page.meta.total_pages, 3);

    let last = api
        .list(&ProductQuery {
            page: 3,
            limit: 10,
            ..ProductQuery::default()
        })
        .await;
    assert_eq!(last.data.len(), 3);
}

#[tokio::test]
async fn filters_compose_with_pagination_meta() {
    let api = ProductApi::new(Latency::none());
    let page = api
        .list(&ProductQuery {
            page: 1,
            limit: 4,
            category: Some(baksho_core::Category::Vegetables),
            ..ProductQuery::default()
        })
        .await;

    assert!(page.data.len() <= 4);
    assert_eq!(
        page.meta.total_pages,
        page.meta.total.div_ceil(page.meta.limit)
    );
    assert!(
        page.data
            .iter()
            .all(|p| p.category == baksho_core::Category::Vegetables)
    );
}

#[tokio::test]
async fn price_sorts_are_exact_inverses_over_the_full_set() {
    let api = ProductApi::new(Latency::none());
    let all = |sort| ProductQuery {
        page: 1,
        limit: 100,
        sort,
        ..ProductQuery::default()
    };

    let low = api.list(&all(SortKey::PriceLow)).await;
    let mut high = api.list(&all(SortKey::PriceHigh)).await;

    high.data.reverse();
    let low_prices: Vec<_> = low.data.iter().map(|p| p.price).collect();
    let high_prices: Vec<_> = high.data.iter().map(|p| p.price).collect();
    assert_eq!(low_prices, high_prices);
}

#[tokio::test]
async fn search_falls_back_to_empty_page_not_an_error() {
    let api = ProductApi::new(Latency::none());
    let page = api
        .list(&ProductQuery {
            page: 1,
            limit: 10,
            search: Some("no such product".to_owned()),
            ..ProductQuery::default()
        })
        .await;

    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.total_pages, 0);
}
