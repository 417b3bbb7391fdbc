//! Application state wiring stores and repositories together.

use std::sync::Arc;

use crate::api::{OrderApi, ProductApi, UserApi};
use crate::api::types::Order;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::services::checkout::{self, CheckoutRequest};
use crate::storage::{JsonFileStorage, Storage};
use crate::stores::{BannerStore, CartStore, LanguageStore, SessionStore, UiStore};

/// Everything a storefront frontend needs, built once at startup.
///
/// Owns the mock repositories and every state store. Deliberately not
/// `Arc`-cloneable: all mutation is single-threaded `&mut` access, the
/// same ownership model the stores themselves assume. Callers that need
/// shared access wrap the whole state, not the pieces.
pub struct AppState {
    config: StorefrontConfig,
    products: ProductApi,
    orders: OrderApi,
    users: UserApi,
    cart: CartStore,
    session: SessionStore,
    banners: BannerStore,
    language: LanguageStore,
    ui: UiStore,
}

impl AppState {
    /// Build state over file-backed storage at the configured data
    /// directory.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let storage: Arc<dyn Storage> = Arc::new(JsonFileStorage::new(&config.data_dir));
        Self::with_storage(config, storage)
    }

    /// Build state over caller-supplied storage; used by tests with
    /// in-memory storage.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn Storage>) -> Self {
        let latency = config.latency();
        Self {
            products: ProductApi::new(latency),
            orders: OrderApi::new(latency),
            users: UserApi::new(latency),
            cart: CartStore::new(Arc::clone(&storage)),
            session: SessionStore::new(Arc::clone(&storage)),
            banners: BannerStore::new(Arc::clone(&storage)),
            language: LanguageStore::new(storage),
            ui: UiStore::new(),
            config,
        }
    }

    /// Build state with no simulated latency, for tests.
    #[must_use]
    pub fn for_tests(storage: Arc<dyn Storage>) -> Self {
        let config = StorefrontConfig {
            api_latency_ms: 0,
            ..StorefrontConfig::default()
        };
        Self::with_storage(config, storage)
    }

    /// The loaded configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// The mock product repository.
    #[must_use]
    pub fn products(&self) -> &ProductApi {
        &self.products
    }

    /// The mock order repository.
    #[must_use]
    pub fn orders(&self) -> &OrderApi {
        &self.orders
    }

    /// Mutable order repository access (checkout appends).
    pub fn orders_mut(&mut self) -> &mut OrderApi {
        &mut self.orders
    }

    /// The mock user repository.
    #[must_use]
    pub fn users(&self) -> &UserApi {
        &self.users
    }

    /// Mutable user repository access (registration appends).
    pub fn users_mut(&mut self) -> &mut UserApi {
        &mut self.users
    }

    /// The cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable cart access.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Mutable session access.
    pub fn session_mut(&mut self) -> &mut SessionStore {
        &mut self.session
    }

    /// The banner store.
    #[must_use]
    pub fn banners(&self) -> &BannerStore {
        &self.banners
    }

    /// Mutable banner access.
    pub fn banners_mut(&mut self) -> &mut BannerStore {
        &mut self.banners
    }

    /// The language store.
    #[must_use]
    pub fn language(&self) -> &LanguageStore {
        &self.language
    }

    /// Mutable language access.
    pub fn language_mut(&mut self) -> &mut LanguageStore {
        &mut self.language
    }

    /// The UI-visibility store.
    #[must_use]
    pub fn ui(&self) -> &UiStore {
        &self.ui
    }

    /// Mutable UI-visibility access.
    pub fn ui_mut(&mut self) -> &mut UiStore {
        &mut self.ui
    }

    /// Log in and establish the session.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::login`].
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        self.session.login(&self.users, email, password).await?;
        Ok(())
    }

    /// Register a new account and establish the session.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::register`].
    pub async fn register(
        &mut self,
        registration: crate::stores::session::Registration,
    ) -> Result<()> {
        self.session.register(&mut self.users, registration).await?;
        Ok(())
    }

    /// Check out the current cart.
    ///
    /// # Errors
    ///
    /// See [`checkout::place_order`].
    pub async fn place_order(&mut self, request: CheckoutRequest) -> Result<Order> {
        let order =
            checkout::place_order(&mut self.cart, &mut self.orders, &self.session, request).await?;
        Ok(order)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[tokio::test]
    async fn test_state_wires_the_full_flow() {
        let mut state = AppState::for_tests(Arc::new(MemoryStorage::new()));

        state.login("demo@example.com", "password123").await.unwrap();

        let product = state
            .products()
            .get(baksho_core::ProductId::new(1))
            .await
            .unwrap();
        state.cart_mut().add(&product, 2).unwrap();

        let order = state
            .place_order(CheckoutRequest {
                street: "42 Maple Street".to_owned(),
                city: "Springfield".to_owned(),
                state: "IL".to_owned(),
                zip: "62704".to_owned(),
                payment_method: "card".to_owned(),
            })
            .await
            .unwrap();

        assert!(order.user_id.is_some());
        assert!(state.cart().is_empty());
    }
}
