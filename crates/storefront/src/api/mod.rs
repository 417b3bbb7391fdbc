//! Mock backend repositories.
//!
//! Stand-ins for a remote store API. Collections live in memory, seeded
//! from [`seed`], and every accessor awaits a simulated [`Latency`] before
//! resolving so callers exercise the same async paths they would against a
//! real backend.
//!
//! Calls never reject: a lookup that finds nothing resolves to `None`,
//! and the mutating endpoints that a real backend would persist are
//! documented no-ops here (see [`products::ProductApi`] and
//! [`orders::OrderApi`]). There is consequently no retry, timeout, or
//! cancellation machinery in this layer.

pub mod orders;
pub mod products;
pub mod seed;
pub mod types;
pub mod users;

pub use orders::OrderApi;
pub use products::ProductApi;
pub use users::UserApi;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated network delay applied to every mock call.
///
/// A small random jitter (up to 20% of the base) keeps repeated calls
/// from resolving in lockstep.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    base: Duration,
}

impl Latency {
    /// Latency with the given base delay in milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self {
            base: Duration::from_millis(millis),
        }
    }

    /// No delay at all; for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self::from_millis(0)
    }

    /// Wait out the simulated delay.
    pub async fn wait(&self) {
        if self.base.is_zero() {
            return;
        }
        let jitter_ms = {
            use rand::Rng;
            let max = u64::try_from(self.base.as_millis()).unwrap_or(u64::MAX) / 5;
            if max == 0 {
                0
            } else {
                rand::rng().random_range(0..=max)
            }
        };
        tokio::time::sleep(self.base + Duration::from_millis(jitter_ms)).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::from_millis(250)
    }
}

/// One page of a listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub data: Vec<T>,
    /// Pagination bookkeeping.
    pub meta: PageMeta,
}

/// Pagination metadata for a listing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// 1-based page number requested.
    pub page: usize,
    /// Page size requested.
    pub limit: usize,
    /// Total matching items before pagination.
    pub total: usize,
    /// `ceil(total / limit)`.
    pub total_pages: usize,
}

/// Slice a filtered collection into a page.
///
/// Pages are 1-based; a page beyond the end returns empty data with the
/// meta intact. A zero `limit` is treated as 1.
pub(crate) fn paginate<T: Clone>(items: &[T], page: usize, limit: usize) -> Page<T> {
    let page = page.max(1);
    let limit = limit.max(1);
    let total = items.len();
    let data = items
        .iter()
        .skip((page - 1) * limit)
        .take(limit)
        .cloned()
        .collect();

    Page {
        data,
        meta: PageMeta {
            page,
            limit,
            total,
            total_pages: total.div_ceil(limit),
        },
    }
}
