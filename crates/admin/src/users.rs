//! Customer views.

use chrono::{DateTime, Utc};
use serde::Serialize;

use baksho_core::{Email, UserId};
use baksho_storefront::api::UserApi;
use baksho_storefront::api::types::UserRecord;

/// A customer as the back-office sees one.
///
/// Deliberately has no password field: the plaintext mock credential in
/// [`UserRecord`] stays behind this view the same way the storefront's
/// session type keeps it out of snapshots.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerView {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub phone: String,
    pub is_admin: bool,
    pub address_count: usize,
    pub joined: DateTime<Utc>,
}

impl From<&UserRecord> for CustomerView {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            name: format!("{} {}", record.first_name, record.last_name)
                .trim()
                .to_owned(),
            phone: record.phone.clone(),
            is_admin: record.is_admin,
            address_count: record.addresses.len(),
            joined: record.created_at,
        }
    }
}

/// Customer listing over the mock user repository.
pub struct UserAdmin<'a> {
    users: &'a UserApi,
}

impl<'a> UserAdmin<'a> {
    /// Create the service over the given repository.
    #[must_use]
    pub const fn new(users: &'a UserApi) -> Self {
        Self { users }
    }

    /// All customers as redacted views, newest account first.
    pub async fn list(&self) -> Vec<CustomerView> {
        let mut views: Vec<CustomerView> = self
            .users
            .list()
            .await
            .iter()
            .map(CustomerView::from)
            .collect();
        views.sort_by_key(|v| std::cmp::Reverse(v.joined));
        views
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use baksho_storefront::api::Latency;

    use super::*;

    #[tokio::test]
    async fn test_views_never_serialize_a_password() {
        let users = UserApi::new(Latency::none());
        let views = UserAdmin::new(&users).list().await;
        assert!(!views.is_empty());

        let json = serde_json::to_string(&views).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("password123"));
    }

    #[tokio::test]
    async fn test_list_is_newest_account_first() {
        let users = UserApi::new(Latency::none());
        let views = UserAdmin::new(&users).list().await;
        assert!(
            views
                .iter()
                .zip(views.iter().skip(1))
                .all(|(a, b)| a.joined >= b.joined)
        );
    }
}
