//! Mock order repository.

use chrono::{Datelike, Utc};
use tracing::instrument;

use baksho_core::{OrderId, OrderStatus, UserId};

use super::types::{NewOrder, Order, OrderQuery, StatusAck};
use super::{Latency, Page, paginate};

/// Days between checkout and the estimated delivery date.
const DELIVERY_ESTIMATE_DAYS: i64 = 3;

/// In-memory stand-in for the remote order API.
///
/// [`OrderApi::create`] is the one genuinely mutating path in the whole
/// mock backend: it appends to the collection and assigns the next
/// sequential order number. [`OrderApi::update_status`] only acknowledges,
/// matching the product mutation endpoints.
#[derive(Debug, Clone)]
pub struct OrderApi {
    orders: Vec<Order>,
    latency: Latency,
}

impl OrderApi {
    /// Repository over the seed orders.
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self::with_orders(super::seed::orders(), latency)
    }

    /// Repository over a caller-supplied collection; for tests.
    #[must_use]
    pub fn with_orders(orders: Vec<Order>, latency: Latency) -> Self {
        Self { orders, latency }
    }

    /// List orders newest-first with status filter, search, and
    /// pagination.
    #[instrument(skip(self))]
    pub async fn list(&self, query: &OrderQuery) -> Page<Order> {
        self.latency.wait().await;

        let mut matches: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| query.status.is_none_or(|s| o.status == s))
            .filter(|o| {
                query
                    .search
                    .as_deref()
                    .is_none_or(|needle| matches_search(o, needle))
            })
            .cloned()
            .collect();

        matches.sort_by_key(|o| std::cmp::Reverse(o.date));
        paginate(&matches, query.page, query.limit)
    }

    /// Look up an order by id. Absent ids resolve to `None`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &OrderId) -> Option<Order> {
        self.latency.wait().await;
        self.orders.iter().find(|o| &o.id == id).cloned()
    }

    /// All orders belonging to a user, newest first.
    #[instrument(skip(self))]
    pub async fn list_for_user(&self, user_id: UserId) -> Vec<Order> {
        self.latency.wait().await;

        let mut orders: Vec<Order> = self
            .orders
            .iter()
            .filter(|o| o.user_id == Some(user_id))
            .cloned()
            .collect();
        orders.sort_by_key(|o| std::cmp::Reverse(o.date));
        orders
    }

    /// Acknowledge a status change without applying it.
    ///
    /// The backing collection keeps the old status; a later [`Self::get`]
    /// will not see the change. Preserved mock-layer behavior.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &OrderId, status: OrderStatus) -> StatusAck {
        self.latency.wait().await;
        StatusAck {
            id: id.clone(),
            status,
            acknowledged_at: Utc::now(),
        }
    }

    /// Append a new order and assign the next sequential order number.
    #[instrument(skip(self, new))]
    pub async fn create(&mut self, new: NewOrder) -> Order {
        self.latency.wait().await;

        let date = Utc::now();
        let order = Order {
            id: OrderId::from_sequence(date.year(), self.orders.len() + 1),
            user_id: new.user_id,
            email: new.email,
            date,
            status: OrderStatus::Processing,
            items: new.items,
            subtotal: new.subtotal,
            tax: new.tax,
            delivery_fee: new.delivery_fee,
            total: new.total,
            delivery_address: new.delivery_address,
            payment_method: new.payment_method,
            estimated_delivery: (date + chrono::Duration::days(DELIVERY_ESTIMATE_DAYS))
                .date_naive(),
        };

        tracing::info!(order_id = %order.id, total = %order.total, "order created");
        self.orders.push(order.clone());
        order
    }

    /// Number of orders in the backing collection.
    #[must_use]
    pub fn total(&self) -> usize {
        self.orders.len()
    }
}

/// Case-insensitive substring match on order id or customer email.
fn matches_search(order: &Order, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    order.id.as_str().to_lowercase().contains(&needle)
        || order
            .email
            .as_ref()
            .is_some_and(|e| e.as_str().to_lowercase().contains(&needle))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use baksho_core::Price;

    use super::super::types::DeliveryAddress;
    use super::*;

    fn delivery_address() -> DeliveryAddress {
        DeliveryAddress {
            street: "42 Maple Street".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip: "62704".to_owned(),
        }
    }

    fn new_order() -> NewOrder {
        NewOrder {
            user_id: Some(UserId::new(1)),
            email: None,
            items: vec![],
            subtotal: Price::from_cents(1000),
            tax: Price::from_cents(80),
            delivery_fee: Price::from_cents(499),
            total: Price::from_cents(1579),
            delivery_address: delivery_address(),
            payment_method: "card".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_create_appends_and_assigns_sequential_id() {
        let mut api = OrderApi::with_orders(vec![], Latency::none());

        let first = api.create(new_order()).await;
        let second = api.create(new_order()).await;

        let year = Utc::now().year();
        assert_eq!(first.id, OrderId::from_sequence(year, 1));
        assert_eq!(second.id, OrderId::from_sequence(year, 2));
        assert_eq!(api.total(), 2);
        assert!(api.get(&first.id).await.is_some());
    }

    #[tokio::test]
    async fn test_create_sets_processing_and_delivery_estimate() {
        let mut api = OrderApi::with_orders(vec![], Latency::none());
        let order = api.create(new_order()).await;

        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(
            order.estimated_delivery,
            (order.date + chrono::Duration::days(3)).date_naive()
        );
    }

    #[tokio::test]
    async fn test_update_status_does_not_persist() {
        let mut api = OrderApi::with_orders(vec![], Latency::none());
        let order = api.create(new_order()).await;

        let ack = api.update_status(&order.id, OrderStatus::Shipped).await;
        assert_eq!(ack.status, OrderStatus::Shipped);

        let reread = api.get(&order.id).await.unwrap();
        assert_eq!(reread.status, OrderStatus::Processing);
    }

    #[tokio::test]
    async fn test_list_filters_by_status() {
        let api = OrderApi::new(Latency::none());
        let query = OrderQuery {
            page: 1,
            limit: 50,
            status: Some(OrderStatus::Delivered),
            ..OrderQuery::default()
        };
        let page = api.list(&query).await;
        assert!(page.data.iter().all(|o| o.status == OrderStatus::Delivered));
    }

    #[tokio::test]
    async fn test_list_searches_by_email() {
        let api = OrderApi::new(Latency::none());
        let query = OrderQuery {
            page: 1,
            limit: 50,
            search: Some("demo@example.com".to_owned()),
            ..OrderQuery::default()
        };
        let page = api.list(&query).await;
        assert!(!page.data.is_empty());
        assert!(
            page.data
                .iter()
                .all(|o| o.email.as_ref().unwrap().as_str() == "demo@example.com")
        );
    }

    #[tokio::test]
    async fn test_list_for_user_is_newest_first() {
        let api = OrderApi::new(Latency::none());
        let orders = api.list_for_user(UserId::new(1)).await;
        assert!(!orders.is_empty());
        assert!(
            orders
                .iter()
                .zip(orders.iter().skip(1))
                .all(|(a, b)| a.date >= b.date)
        );
    }
}
