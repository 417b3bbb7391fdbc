//! Domain types owned by the storefront.
//!
//! These are validated domain objects, separate from the mock backend's
//! record types in [`crate::api::types`].

pub mod banner;
pub mod cart;
pub mod user;

pub use banner::{Banner, BannerUpdate, NewBanner};
pub use cart::{CartLine, CartTotals};
pub use user::{Address, AddressUpdate, NewAddress, ProfileUpdate, UserSession};
