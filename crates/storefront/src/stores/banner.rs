//! The promotional banner store.
//!
//! CRUD over the banner collection, persisted wholesale under the
//! `baksho_banners` storage key and seeded from the static default list
//! when no snapshot exists.

use std::sync::Arc;

use tracing::instrument;

use baksho_core::BannerId;

use crate::api::seed;
use crate::models::banner::{Banner, BannerUpdate, NewBanner};
use crate::storage::{self, Storage, StorageError, keys};

/// The banner collection.
pub struct BannerStore {
    storage: Arc<dyn Storage>,
    banners: Vec<Banner>,
}

impl BannerStore {
    /// Build the store, rehydrating the persisted collection or seeding
    /// the defaults when no usable snapshot exists.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let banners = storage::read_json(storage.as_ref(), keys::BANNERS)
            .unwrap_or_else(seed::banners);
        Self { storage, banners }
    }

    /// Add a banner with a generated id, starting active.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    #[instrument(skip_all)]
    pub fn add(&mut self, new: NewBanner) -> Result<BannerId, StorageError> {
        let id = BannerId::generate();
        self.banners.push(Banner {
            id,
            title: new.title,
            subtitle: new.subtitle,
            image_url: new.image_url,
            link: new.link,
            kind: new.kind,
            active: true,
            priority: new.priority,
        });
        self.persist()?;
        tracing::info!(banner_id = %id, "banner added");
        Ok(id)
    }

    /// Shallow-merge fields into a banner.
    ///
    /// Returns `false` when no banner has the id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn update(&mut self, id: BannerId, update: BannerUpdate) -> Result<bool, StorageError> {
        let Some(banner) = self.banners.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        if let Some(title) = update.title {
            banner.title = title;
        }
        if let Some(subtitle) = update.subtitle {
            banner.subtitle = subtitle;
        }
        if let Some(image_url) = update.image_url {
            banner.image_url = image_url;
        }
        if let Some(link) = update.link {
            banner.link = link;
        }
        if let Some(kind) = update.kind {
            banner.kind = kind;
        }
        if let Some(priority) = update.priority {
            banner.priority = priority;
        }
        self.persist()?;
        Ok(true)
    }

    /// Delete a banner. Returns `false` when no banner has the id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn delete(&mut self, id: BannerId) -> Result<bool, StorageError> {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != id);
        if self.banners.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip a banner's active flag. Returns `false` when no banner has
    /// the id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the snapshot write fails.
    pub fn toggle(&mut self, id: BannerId) -> Result<bool, StorageError> {
        let Some(banner) = self.banners.iter_mut().find(|b| b.id == id) else {
            return Ok(false);
        };
        banner.active = !banner.active;
        self.persist()?;
        Ok(true)
    }

    /// Banners the rotating UI should show.
    #[must_use]
    pub fn active(&self) -> Vec<&Banner> {
        self.banners.iter().filter(|b| b.active).collect()
    }

    /// The whole collection, active or not.
    #[must_use]
    pub fn all(&self) -> &[Banner] {
        &self.banners
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::write_json(self.storage.as_ref(), keys::BANNERS, &self.banners)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use baksho_core::BannerKind;

    use crate::storage::MemoryStorage;

    use super::*;

    fn new_banner() -> NewBanner {
        NewBanner {
            title: "Midweek Markdown".to_owned(),
            subtitle: "Dairy staples, discounted".to_owned(),
            image_url: "/images/banners/midweek.jpg".to_owned(),
            link: "/products?category=dairy".to_owned(),
            kind: BannerKind::Ad,
            priority: 5,
        }
    }

    #[test]
    fn test_seeds_defaults_when_snapshot_absent() {
        let store = BannerStore::new(Arc::new(MemoryStorage::new()));
        assert!(!store.all().is_empty());
    }

    #[test]
    fn test_add_starts_active() {
        let mut store = BannerStore::new(Arc::new(MemoryStorage::new()));
        let id = store.add(new_banner()).unwrap();
        let banner = store.all().iter().find(|b| b.id == id).unwrap();
        assert!(banner.active);
    }

    #[test]
    fn test_active_filters_inactive_entries() {
        let store = BannerStore::new(Arc::new(MemoryStorage::new()));
        let total = store.all().len();
        let active = store.active().len();
        assert!(active < total);
        assert!(store.active().iter().all(|b| b.active));
    }

    #[test]
    fn test_toggle_flips_and_reports_missing() {
        let mut store = BannerStore::new(Arc::new(MemoryStorage::new()));
        let id = store.add(new_banner()).unwrap();

        assert!(store.toggle(id).unwrap());
        let banner = store.all().iter().find(|b| b.id == id).unwrap();
        assert!(!banner.active);

        assert!(!store.toggle(BannerId::generate()).unwrap());
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = BannerStore::new(Arc::new(MemoryStorage::new()));
        let id = store.add(new_banner()).unwrap();

        let changed = store
            .update(
                id,
                BannerUpdate {
                    title: Some("Weekend Markdown".to_owned()),
                    ..BannerUpdate::default()
                },
            )
            .unwrap();
        assert!(changed);

        let banner = store.all().iter().find(|b| b.id == id).unwrap();
        assert_eq!(banner.title, "Weekend Markdown");
        assert_eq!(banner.priority, 5);
    }

    #[test]
    fn test_collection_persists_wholesale() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = BannerStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
        let id = store.add(new_banner()).unwrap();
        let count = store.all().len();
        drop(store);

        let reloaded = BannerStore::new(storage);
        assert_eq!(reloaded.all().len(), count);
        assert!(reloaded.all().iter().any(|b| b.id == id));
    }

    #[test]
    fn test_delete_removes_and_reports_missing() {
        let mut store = BannerStore::new(Arc::new(MemoryStorage::new()));
        let id = store.add(new_banner()).unwrap();

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
    }
}
