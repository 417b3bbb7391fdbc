//! User session and address domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use baksho_core::{AddressId, AddressKind, Email, UserId};

/// The active shopper's persisted profile copy.
///
/// This is the type written to the `user` storage key. It has no password
/// field at all, so a persisted snapshot can never leak credentials; the
/// plaintext mock password lives only in the backend's
/// [`crate::api::types::UserRecord`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSession {
    /// User's id in the mock user collection.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact phone number.
    pub phone: String,
    /// Whether the user may use the back-office.
    pub is_admin: bool,
    /// Saved delivery addresses.
    pub addresses: Vec<Address>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl UserSession {
    /// Full display name.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// The default address, if one is marked.
    ///
    /// At most one default per user is a convention of the data, not an
    /// enforced invariant; the first marked address wins.
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Id unique within the owning user's address list.
    pub id: AddressId,
    /// Address kind label.
    pub kind: AddressKind,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// State or region code.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Whether this is the user's default address.
    pub is_default: bool,
}

/// Input for adding an address.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub kind: AddressKind,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub is_default: bool,
}

/// Partial address edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct AddressUpdate {
    pub kind: Option<AddressKind>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub is_default: Option<bool>,
}

/// Partial profile edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
}
