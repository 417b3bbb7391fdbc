//! Mock product repository.

use tracing::instrument;

use baksho_core::{ProductId, SortKey};

use super::types::{DeleteAck, NewProduct, Product, ProductQuery, ProductUpdate};
use super::{Latency, Page, paginate};

/// In-memory stand-in for the remote product API.
///
/// Listing, lookup, and the admin mutation calls all simulate network
/// latency. The mutation calls synthesize plausible response objects but
/// do **not** touch the backing collection: a created product never shows
/// up in a later listing. That is the documented behavior of the mock
/// layer, preserved rather than fixed.
#[derive(Debug, Clone)]
pub struct ProductApi {
    products: Vec<Product>,
    latency: Latency,
}

impl ProductApi {
    /// Repository over the seed catalog.
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self::with_products(super::seed::products(), latency)
    }

    /// Repository over a caller-supplied catalog; for tests.
    #[must_use]
    pub fn with_products(products: Vec<Product>, latency: Latency) -> Self {
        Self { products, latency }
    }

    /// List products with search, category filter, sort, and pagination.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &ProductQuery) -> Page<Product> {
        self.latency.wait().await;

        let mut matches: Vec<Product> = self
            .products
            .iter()
            .filter(|p| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|needle| matches_search(p, needle))
            })
            .filter(|p| query.category.is_none_or(|c| p.category == c))
            .cloned()
            .collect();

        sort_products(&mut matches, query.sort);
        paginate(&matches, query.page, query.limit)
    }

    /// Look up a product by id. Absent ids resolve to `None`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.latency.wait().await;
        self.products.iter().find(|p| p.id == id).cloned()
    }

    /// Synthesize a created product.
    ///
    /// The response carries the next free id, but the backing collection
    /// is left untouched; the new product is not visible to later calls.
    #[instrument(skip(self, new))]
    pub async fn create(&self, new: NewProduct) -> Product {
        self.latency.wait().await;

        let next_id = self
            .products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .unwrap_or(0)
            + 1;
        let discount = new.price.percent_off(new.original_price);

        Product {
            id: ProductId::new(next_id),
            name: new.name,
            category: new.category,
            price: new.price,
            original_price: new.original_price,
            discount,
            rating: 0.0,
            reviews: 0,
            image: new.image,
            description: new.description,
            in_stock: new.in_stock,
            unit: new.unit,
        }
    }

    /// Synthesize an updated product.
    ///
    /// Returns the merged copy for a known id, `None` otherwise. The
    /// backing collection is left untouched.
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: ProductId, update: ProductUpdate) -> Option<Product> {
        self.latency.wait().await;

        let mut product = self.products.iter().find(|p| p.id == id)?.clone();
        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(original_price) = update.original_price {
            product.original_price = original_price;
        }
        if let Some(image) = update.image {
            product.image = image;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(in_stock) = update.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(unit) = update.unit {
            product.unit = unit;
        }
        product.discount = product.price.percent_off(product.original_price);

        Some(product)
    }

    /// Acknowledge a delete without performing one.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> DeleteAck {
        self.latency.wait().await;
        DeleteAck { id, deleted: true }
    }

    /// Number of products in the backing collection.
    #[must_use]
    pub fn total(&self) -> usize {
        self.products.len()
    }
}

/// Case-insensitive substring match on product name or id.
fn matches_search(product: &Product, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.id.as_i32().to_string().contains(&needle)
}

/// Order a product list by the requested sort key.
fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::PriceLow => products.sort_by_key(|p| p.price),
        SortKey::PriceHigh => products.sort_by_key(|p| std::cmp::Reverse(p.price)),
        SortKey::NameAz => products.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Newest => products.sort_by_key(|p| std::cmp::Reverse(p.id)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use baksho_core::Category;

    use super::*;

    fn api() -> ProductApi {
        ProductApi::new(Latency::none())
    }

    #[tokio::test]
    async fn test_list_default_sort_is_descending_id() {
        let page = api().list(&ProductQuery::first_page()).await;
        let ids: Vec<i32> = page.data.iter().map(|p| p.id.as_i32()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_list_sorts_by_price() {
        let query = ProductQuery {
            page: 1,
            limit: 100,
            sort: SortKey::PriceLow,
            ..ProductQuery::default()
        };
        let page = api().list(&query).await;
        let prices: Vec<_> = page.data.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_unstable();
        assert_eq!(prices, sorted);
    }

    #[tokio::test]
    async fn test_search_matches_name_case_insensitively() {
        let query = ProductQuery {
            page: 1,
            limit: 100,
            search: Some("BANANA".to_owned()),
            ..ProductQuery::default()
        };
        let page = api().list(&query).await;
        assert!(!page.data.is_empty());
        assert!(
            page.data
                .iter()
                .all(|p| p.name.to_lowercase().contains("banana"))
        );
    }

    #[tokio::test]
    async fn test_search_matches_numeric_id() {
        let query = ProductQuery {
            page: 1,
            limit: 100,
            search: Some("17".to_owned()),
            ..ProductQuery::default()
        };
        let page = api().list(&query).await;
        assert!(page.data.iter().any(|p| p.id.as_i32() == 17));
    }

    #[tokio::test]
    async fn test_category_filter_is_exact() {
        let query = ProductQuery {
            page: 1,
            limit: 100,
            category: Some(Category::Dairy),
            ..ProductQuery::default()
        };
        let page = api().list(&query).await;
        assert!(!page.data.is_empty());
        assert!(page.data.iter().all(|p| p.category == Category::Dairy));
    }

    #[tokio::test]
    async fn test_get_absent_id_is_none() {
        assert!(api().get(ProductId::new(9999)).await.is_none());
    }

    #[tokio::test]
    async fn test_create_does_not_mutate_collection() {
        let api = api();
        let before = api.total();

        let created = api
            .create(NewProduct {
                name: "Dragon Fruit".to_owned(),
                category: Category::Fruits,
                price: baksho_core::Price::from_cents(599),
                original_price: baksho_core::Price::from_cents(799),
                image: "/images/products/dragon-fruit.jpg".to_owned(),
                description: "Vivid and mild".to_owned(),
                in_stock: true,
                unit: "each".to_owned(),
            })
            .await;

        assert_eq!(created.id.as_i32(), i32::try_from(before).unwrap() + 1);
        assert_eq!(api.total(), before);
        assert!(api.get(created.id).await.is_none());
    }

    #[tokio::test]
    async fn test_update_merges_without_persisting() {
        let api = api();
        let id = ProductId::new(1);
        let original = api.get(id).await.unwrap();

        let updated = api
            .update(
                id,
                ProductUpdate {
                    name: Some("Renamed".to_owned()),
                    ..ProductUpdate::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.price, original.price);
        // The collection still serves the original
        assert_eq!(api.get(id).await.unwrap().name, original.name);
    }

    #[tokio::test]
    async fn test_update_absent_id_is_none() {
        let result = api()
            .update(ProductId::new(9999), ProductUpdate::default())
            .await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_acknowledges_without_deleting() {
        let api = api();
        let before = api.total();
        let ack = api.delete(ProductId::new(1)).await;
        assert!(ack.deleted);
        assert_eq!(api.total(), before);
        assert!(api.get(ProductId::new(1)).await.is_some());
    }
}
