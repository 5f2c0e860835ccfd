//! Closet service - listing, adding and deleting closet entries.
//!
//! Owns the cached Tops/Bottoms partition. Any write or delete invalidates
//! it; the next `list()` rebuilds it from the store.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::codec::{self, EntryMetadata};
use crate::domain::{Category, ClosetListing, DecodedEntry, GarmentRecord};
use crate::ports::{CoreError, EntryStorePort, RepositoryError};

#[derive(Default)]
struct ListingCache {
    /// Bumped on every mutation so a listing built concurrently with a
    /// write is never stored as current.
    generation: u64,
    listing: Option<Arc<ClosetListing>>,
}

/// Service for the persisted closet.
pub struct ClosetService {
    store: Arc<dyn EntryStorePort>,
    cache: Mutex<ListingCache>,
}

impl ClosetService {
    /// Create a new closet service over an entry store.
    pub fn new(store: Arc<dyn EntryStorePort>) -> Self {
        Self {
            store,
            cache: Mutex::new(ListingCache::default()),
        }
    }

    /// Tops and Bottoms, decoded, each in creation order.
    ///
    /// Entries matching neither prefix are skipped. Undecodable entries are
    /// never an error; they show up with fallback fields.
    pub async fn list(&self) -> Result<Arc<ClosetListing>, CoreError> {
        let generation = {
            let cache = self.lock_cache();
            if let Some(listing) = &cache.listing {
                return Ok(Arc::clone(listing));
            }
            cache.generation
        };

        let listing = Arc::new(self.build_listing().await?);

        let mut cache = self.lock_cache();
        if cache.generation == generation {
            cache.listing = Some(Arc::clone(&listing));
        }
        Ok(listing)
    }

    /// Persist a record with its background-free asset.
    ///
    /// Returns the entry name. Fails with `AlreadyExists` rather than
    /// overwriting an entry with the same encoded name.
    pub async fn add(&self, record: &GarmentRecord, asset: &[u8]) -> Result<String, CoreError> {
        let entry_name = codec::encode(record);
        self.store.write_entry(&entry_name, asset).await?;
        self.invalidate();

        // The name alone is a complete record, so a missing sidecar only
        // loses the tags.
        match EntryMetadata::from_record(record).to_json() {
            Ok(json) => {
                if let Err(e) = self.store.write_sidecar(&entry_name, &json).await {
                    warn!(entry = %entry_name, error = %e, "Failed to write entry sidecar");
                }
            }
            Err(e) => warn!(entry = %entry_name, error = %e, "Failed to serialize entry sidecar"),
        }
        // A listing built while the sidecar was in flight saw only the name.
        self.invalidate();

        info!(entry = %entry_name, category = %record.category, "Added closet entry");
        Ok(entry_name)
    }

    /// Delete an entry and return the refreshed listing.
    ///
    /// Irreversible. Deleting a missing entry reports `NotFound`.
    pub async fn delete(&self, entry_name: &str) -> Result<Arc<ClosetListing>, CoreError> {
        let result = self.store.delete_entry(entry_name).await;
        // Even a NotFound means our cached view may be stale.
        self.invalidate();
        result?;

        info!(entry = %entry_name, "Deleted closet entry");
        self.list().await
    }

    /// Read an entry's image bytes.
    pub async fn asset(&self, entry_name: &str) -> Result<Vec<u8>, CoreError> {
        Ok(self.store.read_entry(entry_name).await?)
    }

    /// Drop the cached partition.
    pub fn invalidate(&self) {
        let mut cache = self.lock_cache();
        cache.generation = cache.generation.wrapping_add(1);
        cache.listing = None;
    }

    async fn build_listing(&self) -> Result<ClosetListing, RepositoryError> {
        let names = self.store.list_entries().await?;
        debug!(count = names.len(), "Rebuilding closet listing");

        let mut listing = ClosetListing::default();
        for name in names {
            let Some(category) = codec::category_for_entry(&name) else {
                continue;
            };
            let entry = self.decode_with_sidecar(&name).await;
            match category {
                Category::Top => listing.tops.push(entry),
                Category::Bottom => listing.bottoms.push(entry),
            }
        }

        sort_by_creation(&mut listing.tops);
        sort_by_creation(&mut listing.bottoms);
        Ok(listing)
    }

    async fn decode_with_sidecar(&self, name: &str) -> DecodedEntry {
        let decoded = codec::decode(name);

        let json = match self.store.read_sidecar(name).await {
            Ok(Some(json)) => json,
            Ok(None) => return decoded,
            Err(e) => {
                warn!(entry = %name, error = %e, "Failed to read entry sidecar");
                return decoded;
            }
        };

        match EntryMetadata::from_json(&json) {
            Ok(meta) => meta.apply_to(&decoded).unwrap_or_else(|| {
                warn!(entry = %name, "Ignoring sidecar that disagrees with entry name");
                decoded
            }),
            Err(e) => {
                warn!(entry = %name, error = %e, "Ignoring unreadable entry sidecar");
                decoded
            }
        }
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, ListingCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Creation order; entries without a timestamp first, then by name.
fn sort_by_creation(entries: &mut [DecodedEntry]) {
    entries.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.entry_name.cmp(&b.entry_name))
    });
}
