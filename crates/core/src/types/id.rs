//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i32()`
/// - `From<i32>` and `Into<i32>` implementations
///
/// # Example
///
/// ```rust
/// # use baksho_core::define_id;
/// define_id!(UserId);
/// define_id!(ProductId);
///
/// let user_id = UserId::new(1);
/// let product_id = ProductId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Create a new ID from an i32 value.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Get the underlying i32 value.
            #[must_use]
            pub const fn as_i32(&self) -> i32 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(UserId);
define_id!(AddressId);

/// Unique identifier for a promotional banner.
///
/// Banner ids are generated, not sequential: the original scheme derived
/// them from the creation timestamp, which can collide. A random UUID
/// cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(Uuid);

impl BannerId {
    /// Generate a fresh banner ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for BannerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for BannerId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Human-readable order number in the `ORD-YYYY-NNN` format.
///
/// Order numbers are assigned sequentially within the order collection;
/// the `NNN` component is zero-padded to three digits (`ORD-2026-007`)
/// but keeps growing past 999 without truncation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Build an order ID from a year and a 1-based sequence number.
    #[must_use]
    pub fn from_sequence(year: i32, sequence: usize) -> Self {
        Self(format!("ORD-{year}-{sequence:03}"))
    }

    /// Get the order ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct_types() {
        let product = ProductId::new(7);
        assert_eq!(product.as_i32(), 7);
        assert_eq!(format!("{product}"), "7");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = UserId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
        let back: UserId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_order_id_zero_pads_to_three_digits() {
        assert_eq!(OrderId::from_sequence(2026, 7).as_str(), "ORD-2026-007");
        assert_eq!(OrderId::from_sequence(2026, 42).as_str(), "ORD-2026-042");
    }

    #[test]
    fn test_order_id_grows_past_three_digits() {
        assert_eq!(OrderId::from_sequence(2026, 1234).as_str(), "ORD-2026-1234");
    }

    #[test]
    fn test_banner_ids_do_not_collide() {
        assert_ne!(BannerId::generate(), BannerId::generate());
    }
}
