//! Dashboard aggregates.

use serde::Serialize;
use tracing::instrument;

use baksho_core::Price;
use baksho_storefront::api::types::{Order, OrderQuery, ProductQuery};
use baksho_storefront::api::{OrderApi, ProductApi, UserApi};

/// How many orders the dashboard's recent-activity panel shows.
const RECENT_ORDER_COUNT: usize = 5;

/// How many orders back the revenue figure looks.
const REVENUE_WINDOW: usize = 50;

/// The fixed demo series behind the weekly sales chart.
///
/// Static by design: the mock backend has no sales history to aggregate,
/// and the chart only needs a plausible shape.
const WEEKLY_SALES_CENTS: [(&str, i64); 7] = [
    ("Mon", 48_250),
    ("Tue", 39_900),
    ("Wed", 52_480),
    ("Thu", 45_120),
    ("Fri", 61_370),
    ("Sat", 74_890),
    ("Sun", 58_660),
];

/// One point on the weekly sales chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySalesPoint {
    /// Weekday label.
    pub day: &'static str,
    /// Sales total for the day.
    pub total: Price,
}

/// The aggregated KPIs the dashboard renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Total orders in the collection.
    pub orders: usize,
    /// Revenue summed over the most recent orders.
    pub revenue: Price,
    /// Total customers in the collection.
    pub customers: usize,
    /// Total products in the catalog.
    pub products: usize,
    /// Fixed weekly sales series for the chart.
    pub weekly_sales: Vec<WeeklySalesPoint>,
    /// The most recent orders, newest first.
    pub recent_orders: Vec<Order>,
}

/// Read-side service computing dashboard aggregates over the mock
/// repositories.
pub struct DashboardService<'a> {
    products: &'a ProductApi,
    orders: &'a OrderApi,
    users: &'a UserApi,
}

impl<'a> DashboardService<'a> {
    /// Create the service over the given repositories.
    #[must_use]
    pub const fn new(products: &'a ProductApi, orders: &'a OrderApi, users: &'a UserApi) -> Self {
        Self {
            products,
            orders,
            users,
        }
    }

    /// Compute the dashboard aggregates.
    #[instrument(skip(self))]
    pub async fn stats(&self) -> DashboardStats {
        let order_page = self
            .orders
            .list(&OrderQuery {
                page: 1,
                limit: REVENUE_WINDOW,
                ..OrderQuery::default()
            })
            .await;

        let revenue: Price = order_page.data.iter().map(|o| o.total).sum();
        let recent_orders: Vec<Order> = order_page
            .data
            .iter()
            .take(RECENT_ORDER_COUNT)
            .cloned()
            .collect();

        let product_page = self
            .products
            .list(&ProductQuery {
                page: 1,
                limit: 1,
                ..ProductQuery::default()
            })
            .await;

        let customers = self.users.list().await.len();

        DashboardStats {
            orders: order_page.meta.total,
            revenue,
            customers,
            products: product_page.meta.total,
            weekly_sales: weekly_sales(),
            recent_orders,
        }
    }
}

/// The fixed weekly sales series.
#[must_use]
pub fn weekly_sales() -> Vec<WeeklySalesPoint> {
    WEEKLY_SALES_CENTS
        .iter()
        .map(|&(day, cents)| WeeklySalesPoint {
            day,
            total: Price::from_cents(cents),
        })
        .collect()
}
