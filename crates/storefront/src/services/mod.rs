//! Cross-store flows.

pub mod checkout;

pub use checkout::{CheckoutError, CheckoutRequest, FieldError, place_order};
