//! Persistence adapter
//!
//! Typed JSON read/write over a [`KvBackend`]. Reads never fail: a missing
//! key, a backend error or an unparsable document all come back as `None`
//! (or an empty list) so the shop keeps serving from seed or empty state.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ErrorCode;
use shared::models::Product;
use std::sync::Arc;

use super::kv::{KvBackend, MemoryKv, StorageResult};

/// Storage keys
pub mod keys {
    pub const PRODUCTS: &str = "triveni_products";
    pub const ORDERS: &str = "triveni_orders";
    pub const USER: &str = "triveni_user";
    pub const CART: &str = "triveni_cart";
    pub const INQUIRIES: &str = "triveni_inquiries";
}

/// What [`Storage::initialize`] changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Store had no usable catalog, the full seed was written
    pub seeded: bool,
    /// Seed ids appended to an existing catalog
    pub appended: Vec<String>,
    /// Ids whose image was replaced by the seed image
    pub images_refreshed: Vec<String>,
}

impl ReconcileReport {
    pub fn changed(&self) -> bool {
        self.seeded || !self.appended.is_empty() || !self.images_refreshed.is_empty()
    }
}

/// Merge the built-in catalog into a stored one.
///
/// Seed entries whose id is absent are appended. Entries present in both
/// get the seed image when theirs differs; every other stored field is kept.
/// Stored entries unknown to the seed are left alone.
pub fn reconcile(stored: &mut Vec<Product>, seed: &[Product]) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    for seed_product in seed {
        match stored.iter_mut().find(|p| p.id == seed_product.id) {
            Some(existing) => {
                if existing.image != seed_product.image {
                    existing.image = seed_product.image.clone();
                    report.images_refreshed.push(existing.id.clone());
                }
            }
            None => {
                stored.push(seed_product.clone());
                report.appended.push(seed_product.id.clone());
            }
        }
    }

    report
}

#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn KvBackend>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage").finish_non_exhaustive()
    }
}

impl Storage {
    pub fn new(backend: impl KvBackend) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Storage over a fresh [`MemoryKv`]
    pub fn in_memory() -> Self {
        Self::new(MemoryKv::new())
    }

    /// Read and decode `key`. Absent, unreadable and corrupt all yield `None`.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = match self.backend.get(key) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Storage read failed, treating as absent");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(
                    key,
                    code = ErrorCode::StorageCorrupted.code(),
                    error = %e,
                    "Stored value is corrupt, treating as absent"
                );
                None
            }
        }
    }

    /// Read a list under `key`, empty when absent or corrupt
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.read(key).unwrap_or_default()
    }

    /// Encode and write `value`, replacing whatever was stored
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.backend.set(key, &bytes)
    }

    pub fn remove(&self, key: &str) -> StorageResult<()> {
        self.backend.remove(key)
    }

    /// Whether `key` holds a value (corrupt or not)
    pub fn contains(&self, key: &str) -> bool {
        matches!(self.backend.get(key), Ok(Some(_)))
    }

    /// Insert `item` at the front of the list under `key` (most recent first)
    pub fn prepend<T: Serialize + DeserializeOwned>(&self, key: &str, item: T) -> StorageResult<()> {
        let mut list: Vec<T> = self.read_list(key);
        list.insert(0, item);
        self.write(key, &list)
    }

    /// Bring the store into a usable state on start.
    ///
    /// Seeds the catalog when empty, otherwise reconciles it with `seed` and
    /// writes back only when something changed. Makes sure the order and
    /// inquiry lists exist.
    pub fn initialize(&self, seed: &[Product]) -> StorageResult<ReconcileReport> {
        let stored: Option<Vec<Product>> = self.read(keys::PRODUCTS);

        let report = match stored {
            Some(mut products) if !products.is_empty() => {
                let report = reconcile(&mut products, seed);
                if report.changed() {
                    self.write(keys::PRODUCTS, &products)?;
                }
                report
            }
            _ => {
                self.write(keys::PRODUCTS, seed)?;
                ReconcileReport {
                    seeded: true,
                    ..Default::default()
                }
            }
        };

        for key in [keys::ORDERS, keys::INQUIRIES] {
            if self.read::<Vec<serde_json::Value>>(key).is_none() {
                self.write::<[serde_json::Value]>(key, &[])?;
            }
        }

        if report.changed() {
            tracing::info!(
                seeded = report.seeded,
                appended = ?report.appended,
                images_refreshed = ?report.images_refreshed,
                "Catalog reconciled with built-in products"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::initial_products;

    #[test]
    fn test_initialize_seeds_empty_store() {
        let storage = Storage::in_memory();
        let report = storage.initialize(&initial_products()).unwrap();

        assert!(report.seeded);
        let products: Vec<Product> = storage.read_list(keys::PRODUCTS);
        assert_eq!(products, initial_products());
        assert!(storage.contains(keys::ORDERS));
        assert!(storage.contains(keys::INQUIRIES));
    }

    #[test]
    fn test_initialize_appends_missing_and_refreshes_images() {
        let storage = Storage::in_memory();
        let seed = initial_products();

        // p1..p6 stored, p1 with a stale image and an admin-edited price
        let mut stored: Vec<Product> = seed[..6].to_vec();
        stored[0].image = "https://old.example/mango.jpg".into();
        stored[0].variants[0].price = 1300;
        storage.write(keys::PRODUCTS, &stored).unwrap();

        let report = storage.initialize(&seed).unwrap();
        assert!(!report.seeded);
        assert_eq!(report.appended, vec!["p7", "p8", "p9", "p10", "p11", "p12"]);
        assert_eq!(report.images_refreshed, vec!["p1"]);

        let products: Vec<Product> = storage.read_list(keys::PRODUCTS);
        assert_eq!(products.len(), 12);
        assert_eq!(products[0].image, seed[0].image);
        assert_eq!(products[0].variants[0].price, 1300);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let storage = Storage::in_memory();
        let seed = initial_products();
        storage.initialize(&seed).unwrap();

        let report = storage.initialize(&seed).unwrap();
        assert!(!report.changed());
    }

    #[test]
    fn test_initialize_keeps_admin_products() {
        let storage = Storage::in_memory();
        let seed = initial_products();
        let mut stored = seed.clone();
        let mut custom = seed[2].clone();
        custom.id = "1735000000000".into();
        custom.name = "Sapota".into();
        stored.push(custom);
        storage.write(keys::PRODUCTS, &stored).unwrap();

        storage.initialize(&seed).unwrap();
        let products: Vec<Product> = storage.read_list(keys::PRODUCTS);
        assert_eq!(products.len(), 13);
        assert_eq!(products[12].name, "Sapota");
    }

    #[test]
    fn test_corrupt_value_reads_as_absent() {
        let kv = MemoryKv::new();
        kv.set(keys::ORDERS, b"{not json").unwrap();
        let storage = Storage::new(kv);

        assert!(storage.read::<Vec<serde_json::Value>>(keys::ORDERS).is_none());
        assert!(storage.read_list::<serde_json::Value>(keys::ORDERS).is_empty());
    }

    #[test]
    fn test_corrupt_catalog_is_reseeded() {
        let kv = MemoryKv::new();
        kv.set(keys::PRODUCTS, b"[{\"id\":").unwrap();
        let storage = Storage::new(kv);

        let report = storage.initialize(&initial_products()).unwrap();
        assert!(report.seeded);
        assert_eq!(storage.read_list::<Product>(keys::PRODUCTS).len(), 12);
    }

    #[test]
    fn test_prepend_is_most_recent_first() {
        let storage = Storage::in_memory();
        storage.prepend(keys::INQUIRIES, "first".to_string()).unwrap();
        storage.prepend(keys::INQUIRIES, "second".to_string()).unwrap();

        let list: Vec<String> = storage.read_list(keys::INQUIRIES);
        assert_eq!(list, vec!["second", "first"]);
    }
}
