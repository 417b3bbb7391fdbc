//! Order management.

use tracing::instrument;

use baksho_core::{OrderId, OrderStatus};
use baksho_storefront::api::types::{Order, OrderQuery, StatusAck};
use baksho_storefront::api::{OrderApi, Page};

/// Order management over the mock order repository.
pub struct OrderAdmin<'a> {
    orders: &'a OrderApi,
}

impl<'a> OrderAdmin<'a> {
    /// Create the service over the given repository.
    #[must_use]
    pub const fn new(orders: &'a OrderApi) -> Self {
        Self { orders }
    }

    /// List orders with status filter and id/email search.
    pub async fn list(&self, query: &OrderQuery) -> Page<Order> {
        self.orders.list(query).await
    }

    /// Look up one order.
    pub async fn get(&self, id: &OrderId) -> Option<Order> {
        self.orders.get(id).await
    }

    /// Request a status change.
    ///
    /// The mock layer acknowledges without persisting: a later [`Self::get`]
    /// still sees the old status.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &OrderId, status: OrderStatus) -> StatusAck {
        let ack = self.orders.update_status(id, status).await;
        tracing::info!(order_id = %id, status = %status, "status update acknowledged");
        ack
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use baksho_storefront::api::Latency;

    use super::*;

    #[tokio::test]
    async fn test_status_filter() {
        let orders = OrderApi::new(Latency::none());
        let admin = OrderAdmin::new(&orders);

        let page = admin
            .list(&OrderQuery {
                page: 1,
                limit: 50,
                status: Some(OrderStatus::Shipped),
                ..OrderQuery::default()
            })
            .await;
        assert!(page.data.iter().all(|o| o.status == OrderStatus::Shipped));
    }

    #[tokio::test]
    async fn test_status_update_is_acknowledged_not_applied() {
        let orders = OrderApi::new(Latency::none());
        let admin = OrderAdmin::new(&orders);

        let page = admin
            .list(&OrderQuery {
                page: 1,
                limit: 1,
                ..OrderQuery::default()
            })
            .await;
        let order = page.data.first().unwrap().clone();

        let ack = admin.update_status(&order.id, OrderStatus::Cancelled).await;
        assert_eq!(ack.status, OrderStatus::Cancelled);

        let reread = admin.get(&order.id).await.unwrap();
        assert_eq!(reread.status, order.status);
    }
}
