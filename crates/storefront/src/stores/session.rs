//! The user session store.
//!
//! Session lifecycle (login, register, logout) and profile/address
//! mutation, persisted under the `user` storage key. The mock user
//! repository is injected per call rather than owned, so the store can
//! be constructed from storage alone.

use std::sync::Arc;

use thiserror::Error;
use tracing::instrument;

use baksho_core::{AddressId, Email, EmailError, UserId};

use crate::api::UserApi;
use crate::api::types::{NewUser, UserRecord};
use crate::models::user::{Address, AddressUpdate, NewAddress, ProfileUpdate, UserSession};
use crate::storage::{self, Storage, StorageError, keys};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password. Deliberately generic: the message does
    /// not reveal which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A registration field failed validation.
    #[error("{field} is required")]
    MissingField {
        /// The offending form field.
        field: &'static str,
    },

    /// Registration email is malformed.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// An operation that needs an active session was called without one.
    #[error("not signed in")]
    NotAuthenticated,

    /// The addressed entity does not exist.
    #[error("address not found")]
    AddressNotFound,

    /// Persisting the session failed.
    #[error("session storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Registration form input.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// The active user session.
///
/// Holds at most one authenticated user. Address ids are assigned from a
/// monotonic in-process counter seeded above the largest id in the
/// rehydrated session, so deleting an address never frees its id for
/// reuse within the process lifetime.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    session: Option<UserSession>,
    next_address_id: i32,
}

impl SessionStore {
    /// Build the store, rehydrating any persisted session.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let session: Option<UserSession> = storage::read_json(storage.as_ref(), keys::USER);
        let next_address_id = next_address_id(session.as_ref());
        Self {
            storage,
            session,
            next_address_id,
        }
    }

    /// Log in against the mock user repository.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no user matches;
    /// [`AuthError::Storage`] if persisting the session fails.
    #[instrument(skip_all, fields(email = %email))]
    pub async fn login(
        &mut self,
        users: &UserApi,
        email: &str,
        password: &str,
    ) -> Result<&UserSession, AuthError> {
        let record = users
            .find_by_credentials(email, password)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        tracing::info!(user_id = %record.id, "login succeeded");
        self.establish(session_from_record(record))
    }

    /// Register a new account and immediately establish it as the
    /// active session.
    ///
    /// The mock repository does not check email uniqueness; this layer
    /// only validates the form fields.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingField`] / [`AuthError::InvalidEmail`]
    /// on bad input; [`AuthError::Storage`] if persisting fails.
    #[instrument(skip_all)]
    pub async fn register(
        &mut self,
        users: &mut UserApi,
        registration: Registration,
    ) -> Result<&UserSession, AuthError> {
        require_field("email", &registration.email)?;
        require_field("password", &registration.password)?;
        require_field("first name", &registration.first_name)?;
        require_field("last name", &registration.last_name)?;
        let email = Email::parse(registration.email.trim())?;

        let record = users
            .create(NewUser {
                email,
                password: registration.password,
                first_name: registration.first_name,
                last_name: registration.last_name,
                phone: registration.phone,
            })
            .await;

        self.establish(session_from_record(record))
    }

    /// Clear the session and its persisted snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Storage`] if removing the snapshot fails.
    #[instrument(skip_all)]
    pub fn logout(&mut self) -> Result<(), AuthError> {
        self.session = None;
        self.storage.remove(keys::USER)?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// Shallow-merge profile fields into the active session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session;
    /// [`AuthError::Storage`] if persisting fails.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), AuthError> {
        let session = self.session.as_mut().ok_or(AuthError::NotAuthenticated)?;
        if let Some(first_name) = update.first_name {
            session.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            session.last_name = last_name;
        }
        if let Some(phone) = update.phone {
            session.phone = phone;
        }
        self.persist()
    }

    /// Add an address to the active session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session;
    /// [`AuthError::Storage`] if persisting fails.
    pub fn add_address(&mut self, new: NewAddress) -> Result<AddressId, AuthError> {
        let id = AddressId::new(self.next_address_id);
        let session = self.session.as_mut().ok_or(AuthError::NotAuthenticated)?;
        session.addresses.push(Address {
            id,
            kind: new.kind,
            street: new.street,
            city: new.city,
            state: new.state,
            zip: new.zip,
            is_default: new.is_default,
        });
        self.next_address_id += 1;
        self.persist()?;
        Ok(id)
    }

    /// Shallow-merge fields into an existing address.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session;
    /// [`AuthError::AddressNotFound`] for an unknown id;
    /// [`AuthError::Storage`] if persisting fails.
    pub fn update_address(&mut self, id: AddressId, update: AddressUpdate) -> Result<(), AuthError> {
        let session = self.session.as_mut().ok_or(AuthError::NotAuthenticated)?;
        let address = session
            .addresses
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AuthError::AddressNotFound)?;

        if let Some(kind) = update.kind {
            address.kind = kind;
        }
        if let Some(street) = update.street {
            address.street = street;
        }
        if let Some(city) = update.city {
            address.city = city;
        }
        if let Some(state) = update.state {
            address.state = state;
        }
        if let Some(zip) = update.zip {
            address.zip = zip;
        }
        if let Some(is_default) = update.is_default {
            address.is_default = is_default;
        }
        self.persist()
    }

    /// Delete an address from the active session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] without a session;
    /// [`AuthError::AddressNotFound`] for an unknown id;
    /// [`AuthError::Storage`] if persisting fails.
    pub fn delete_address(&mut self, id: AddressId) -> Result<(), AuthError> {
        let session = self.session.as_mut().ok_or(AuthError::NotAuthenticated)?;
        let before = session.addresses.len();
        session.addresses.retain(|a| a.id != id);
        if session.addresses.len() == before {
            return Err(AuthError::AddressNotFound);
        }
        self.persist()
    }

    /// The active session, if any.
    #[must_use]
    pub fn current(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    /// The active user's id, if signed in.
    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.session.as_ref().map(|s| s.id)
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the signed-in user may use the back-office.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin)
    }

    fn establish(&mut self, session: UserSession) -> Result<&UserSession, AuthError> {
        self.next_address_id = next_address_id(Some(&session));
        self.session = Some(session);
        self.persist()?;
        // The session was just set; re-borrow for the caller.
        self.session.as_ref().ok_or(AuthError::NotAuthenticated)
    }

    fn persist(&self) -> Result<(), AuthError> {
        if let Some(session) = &self.session {
            storage::write_json(self.storage.as_ref(), keys::USER, session)?;
        }
        Ok(())
    }
}

/// Copy a repository record into a session, leaving the password behind.
fn session_from_record(record: UserRecord) -> UserSession {
    UserSession {
        id: record.id,
        email: record.email,
        first_name: record.first_name,
        last_name: record.last_name,
        phone: record.phone,
        is_admin: record.is_admin,
        addresses: record.addresses,
        created_at: record.created_at,
    }
}

/// First free address id for a session: one above the largest in use.
fn next_address_id(session: Option<&UserSession>) -> i32 {
    session
        .map(|s| {
            s.addresses
                .iter()
                .map(|a| a.id.as_i32())
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0)
        + 1
}

fn require_field(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.trim().is_empty() {
        return Err(AuthError::MissingField { field });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use baksho_core::AddressKind;

    use crate::api::Latency;
    use crate::storage::MemoryStorage;

    use super::*;

    fn users() -> UserApi {
        UserApi::new(Latency::none())
    }

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    fn registration() -> Registration {
        Registration {
            email: "fern@example.com".to_owned(),
            password: "fernfern".to_owned(),
            first_name: "Fern".to_owned(),
            last_name: "Ahmed".to_owned(),
            phone: "555-0101".to_owned(),
        }
    }

    #[tokio::test]
    async fn test_login_strips_password_from_snapshot() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SessionStore::new(Arc::clone(&storage) as Arc<dyn Storage>);

        store
            .login(&users(), "demo@example.com", "password123")
            .await
            .unwrap();

        let raw = storage.get(keys::USER).unwrap().unwrap();
        assert!(!raw.contains("password123"));
        assert!(raw.contains("demo@example.com"));
    }

    #[tokio::test]
    async fn test_login_failure_is_generic() {
        let mut store = store();
        let err = store
            .login(&users(), "demo@example.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_establishes_session() {
        let mut store = store();
        let mut users = users();

        let session = store.register(&mut users, registration()).await.unwrap();
        assert_eq!(session.email.as_str(), "fern@example.com");
        assert!(store.is_authenticated());
        assert!(!store.is_admin());
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let mut store = store();
        let mut users = users();

        let mut reg = registration();
        reg.first_name = "  ".to_owned();
        let err = store.register(&mut users, reg).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingField { field } if field == "first name"));
    }

    #[tokio::test]
    async fn test_logout_clears_snapshot() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SessionStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
        store
            .login(&users(), "demo@example.com", "password123")
            .await
            .unwrap();

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert!(storage.get(keys::USER).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_session_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = SessionStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
        store
            .login(&users(), "demo@example.com", "password123")
            .await
            .unwrap();
        drop(store);

        let reloaded = SessionStore::new(storage);
        assert!(reloaded.is_authenticated());
        assert_eq!(
            reloaded.current().unwrap().email.as_str(),
            "demo@example.com"
        );
    }

    #[tokio::test]
    async fn test_address_ids_survive_deletion_without_reuse() {
        let mut store = store();
        store
            .login(&users(), "demo@example.com", "password123")
            .await
            .unwrap();

        let new_address = |street: &str| NewAddress {
            kind: AddressKind::Other,
            street: street.to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip: "62704".to_owned(),
            is_default: false,
        };

        // Demo user seeds addresses 1 and 2
        let third = store.add_address(new_address("7 Elm Court")).unwrap();
        assert_eq!(third.as_i32(), 3);

        store.delete_address(third).unwrap();
        let fourth = store.add_address(new_address("9 Oak Row")).unwrap();
        assert_eq!(fourth.as_i32(), 4);
    }

    #[tokio::test]
    async fn test_update_profile_shallow_merges() {
        let mut store = store();
        store
            .login(&users(), "demo@example.com", "password123")
            .await
            .unwrap();

        store
            .update_profile(ProfileUpdate {
                phone: Some("555-0999".to_owned()),
                ..ProfileUpdate::default()
            })
            .unwrap();

        let session = store.current().unwrap();
        assert_eq!(session.phone, "555-0999");
        assert_eq!(session.first_name, "Demo");
    }

    #[test]
    fn test_mutations_require_session() {
        let mut store = store();
        assert!(matches!(
            store.update_profile(ProfileUpdate::default()),
            Err(AuthError::NotAuthenticated)
        ));
        assert!(matches!(
            store.delete_address(AddressId::new(1)),
            Err(AuthError::AddressNotFound | AuthError::NotAuthenticated)
        ));
    }
}
