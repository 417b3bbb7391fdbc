//! The display language store.
//!
//! Holds the selected locale, persisted under the `language` storage
//! key, and resolves UI strings from static translation tables.

use std::sync::Arc;

use baksho_core::Language;

use crate::storage::{self, Storage, StorageError, keys};

/// UI strings keyed by label, one column per locale (EN, BN, DE).
///
/// Lookups fall back to English, and finally to the key itself, so a
/// missing translation never breaks rendering.
const TRANSLATIONS: &[(&str, [&str; 3])] = &[
    ("nav.home", ["Home", "হোম", "Startseite"]),
    ("nav.products", ["Products", "পণ্য", "Produkte"]),
    ("nav.orders", ["Orders", "অর্ডার", "Bestellungen"]),
    ("nav.cart", ["Cart", "কার্ট", "Warenkorb"]),
    ("cart.title", ["Your Cart", "আপনার কার্ট", "Ihr Warenkorb"]),
    (
        "cart.empty",
        ["Your cart is empty", "আপনার কার্ট খালি", "Ihr Warenkorb ist leer"],
    ),
    ("cart.subtotal", ["Subtotal", "সাবটোটাল", "Zwischensumme"]),
    ("cart.tax", ["Tax", "কর", "Steuer"]),
    (
        "cart.delivery_fee",
        ["Delivery Fee", "ডেলিভারি ফি", "Liefergebühr"],
    ),
    ("cart.total", ["Total", "মোট", "Gesamt"]),
    ("cart.checkout", ["Checkout", "চেকআউট", "Zur Kasse"]),
    ("auth.login", ["Sign In", "লগইন", "Anmelden"]),
    ("auth.logout", ["Sign Out", "লগআউট", "Abmelden"]),
    ("auth.register", ["Create Account", "নিবন্ধন", "Registrieren"]),
    (
        "checkout.place_order",
        ["Place Order", "অর্ডার করুন", "Bestellung aufgeben"],
    ),
    ("banner.shop_now", ["Shop Now", "এখনই কিনুন", "Jetzt einkaufen"]),
];

/// The selected display language.
pub struct LanguageStore {
    storage: Arc<dyn Storage>,
    current: Language,
}

impl LanguageStore {
    /// Build the store, rehydrating the persisted locale or defaulting
    /// to English.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let current = storage::read_json(storage.as_ref(), keys::LANGUAGE).unwrap_or_default();
        Self { storage, current }
    }

    /// The selected locale.
    #[must_use]
    pub const fn current(&self) -> Language {
        self.current
    }

    /// Select a locale and persist the choice.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn set(&mut self, language: Language) -> Result<(), StorageError> {
        self.current = language;
        storage::write_json(self.storage.as_ref(), keys::LANGUAGE, &self.current)
    }

    /// Resolve a UI string in the selected locale.
    ///
    /// Falls back to English for untranslated keys and to the key itself
    /// when the key is unknown.
    #[must_use]
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translate(self.current, key)
    }
}

/// Locale-aware string lookup against the static tables.
#[must_use]
pub fn translate(language: Language, key: &str) -> &str {
    let column = match language {
        Language::En => 0,
        Language::Bn => 1,
        Language::De => 2,
    };
    TRANSLATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .and_then(|(_, row)| row.get(column).or_else(|| row.first()).copied())
        .unwrap_or(key)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_defaults_to_english() {
        let store = LanguageStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.current(), Language::En);
        assert_eq!(store.translate("cart.title"), "Your Cart");
    }

    #[test]
    fn test_translates_selected_locale() {
        let mut store = LanguageStore::new(Arc::new(MemoryStorage::new()));
        store.set(Language::De).unwrap();
        assert_eq!(store.translate("cart.title"), "Ihr Warenkorb");

        store.set(Language::Bn).unwrap();
        assert_eq!(store.translate("nav.cart"), "কার্ট");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        let store = LanguageStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(store.translate("nav.mystery"), "nav.mystery");
    }

    #[test]
    fn test_selection_survives_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = LanguageStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
        store.set(Language::De).unwrap();
        drop(store);

        let reloaded = LanguageStore::new(storage);
        assert_eq!(reloaded.current(), Language::De);
    }

    #[test]
    fn test_persisted_form_is_the_locale_code() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = LanguageStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
        store.set(Language::Bn).unwrap();

        assert_eq!(
            storage.get(keys::LANGUAGE).unwrap().as_deref(),
            Some("\"BN\"")
        );
    }
}
