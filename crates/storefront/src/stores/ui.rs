//! UI-visibility state.
//!
//! Search overlay and cart drawer flags. Unlike the other stores this
//! state is ephemeral: it is never persisted and resets with the
//! process.

/// Visibility flags for the transient UI surfaces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiStore {
    search_open: bool,
    cart_open: bool,
}

impl UiStore {
    /// Everything closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the search overlay is visible.
    #[must_use]
    pub const fn is_search_open(&self) -> bool {
        self.search_open
    }

    /// Whether the cart drawer is visible.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Flip the search overlay; opening it closes the cart drawer.
    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
        if self.search_open {
            self.cart_open = false;
        }
    }

    /// Flip the cart drawer; opening it closes the search overlay.
    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
        if self.cart_open {
            self.search_open = false;
        }
    }

    /// Close everything (route changes do this).
    pub fn close_all(&mut self) {
        self.search_open = false;
        self.cart_open = false;
    }
}
