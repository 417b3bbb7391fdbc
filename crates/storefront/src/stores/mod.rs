//! Durable client-side state stores.
//!
//! One store owns each state domain (cart, session, banners, language,
//! UI visibility). Mutations are synchronous `&mut self` methods; every
//! mutation writes the domain's full JSON snapshot to storage, and each
//! store rehydrates from its snapshot at construction. There is no
//! ambient global state: stores are built with an injected
//! [`crate::storage::Storage`] handle and passed where they are needed.

pub mod banner;
pub mod cart;
pub mod language;
pub mod session;
pub mod ui;

pub use banner::BannerStore;
pub use cart::CartStore;
pub use language::LanguageStore;
pub use session::{AuthError, Registration, SessionStore};
pub use ui::UiStore;
