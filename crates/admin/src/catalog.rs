//! Catalog management.

use tracing::instrument;

use baksho_core::ProductId;
use baksho_storefront::api::types::{DeleteAck, NewProduct, Product, ProductQuery, ProductUpdate};
use baksho_storefront::api::{Page, ProductApi};

/// Catalog management over the mock product repository.
///
/// The mutation calls inherit the repository's documented behavior: they
/// synthesize responses without touching the backing collection, so an
/// admin sees a success that the next listing does not reflect.
pub struct ProductAdmin<'a> {
    products: &'a ProductApi,
}

impl<'a> ProductAdmin<'a> {
    /// Create the service over the given repository.
    #[must_use]
    pub const fn new(products: &'a ProductApi) -> Self {
        Self { products }
    }

    /// List products for the admin table.
    pub async fn list(&self, query: &ProductQuery) -> Page<Product> {
        self.products.list(query).await
    }

    /// Look up one product.
    pub async fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(id).await
    }

    /// Create a product (synthesized; not visible to later listings).
    #[instrument(skip_all, fields(name = %new.name))]
    pub async fn create(&self, new: NewProduct) -> Product {
        let product = self.products.create(new).await;
        tracing::info!(product_id = %product.id, "product create acknowledged");
        product
    }

    /// Update a product (synthesized; not visible to later listings).
    #[instrument(skip(self, update))]
    pub async fn update(&self, id: ProductId, update: ProductUpdate) -> Option<Product> {
        let product = self.products.update(id, update).await;
        if product.is_some() {
            tracing::info!(product_id = %id, "product update acknowledged");
        }
        product
    }

    /// Delete a product (acknowledged; nothing is removed).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> DeleteAck {
        let ack = self.products.delete(id).await;
        tracing::info!(product_id = %id, "product delete acknowledged");
        ack
    }
}
