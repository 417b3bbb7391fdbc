//! Mock user repository.

use chrono::Utc;
use tracing::instrument;

use baksho_core::UserId;

use super::types::{NewUser, UserRecord};
use super::Latency;

/// In-memory stand-in for the remote user API.
///
/// Credentials are compared in plaintext because the collection is demo
/// data; nothing here is a pattern for real credential storage.
#[derive(Debug, Clone)]
pub struct UserApi {
    users: Vec<UserRecord>,
    latency: Latency,
}

impl UserApi {
    /// Repository over the seed users.
    #[must_use]
    pub fn new(latency: Latency) -> Self {
        Self::with_users(super::seed::users(), latency)
    }

    /// Repository over a caller-supplied collection; for tests.
    #[must_use]
    pub fn with_users(users: Vec<UserRecord>, latency: Latency) -> Self {
        Self { users, latency }
    }

    /// Find the user whose email and password both match.
    #[instrument(skip(self, password))]
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.latency.wait().await;
        self.users
            .iter()
            .find(|u| u.email.as_str() == email && u.password == password)
            .cloned()
    }

    /// Find a user by email.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.latency.wait().await;
        self.users.iter().find(|u| u.email.as_str() == email).cloned()
    }

    /// Append a new user record.
    ///
    /// The id is `len + 1` and the email is **not** checked for
    /// uniqueness; both are preserved mock-layer behavior. The new record
    /// starts with an empty address list.
    #[instrument(skip(self, new))]
    pub async fn create(&mut self, new: NewUser) -> UserRecord {
        self.latency.wait().await;

        let record = UserRecord {
            id: UserId::new(i32::try_from(self.users.len()).unwrap_or(i32::MAX - 1) + 1),
            email: new.email,
            password: new.password,
            first_name: new.first_name,
            last_name: new.last_name,
            phone: new.phone,
            is_admin: false,
            addresses: Vec::new(),
            created_at: Utc::now(),
        };

        tracing::info!(user_id = %record.id, "user registered");
        self.users.push(record.clone());
        record
    }

    /// All user records.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Vec<UserRecord> {
        self.latency.wait().await;
        self.users.clone()
    }

    /// Number of users in the backing collection.
    #[must_use]
    pub fn total(&self) -> usize {
        self.users.len()
    }
}
