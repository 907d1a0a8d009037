use crate::Result;
use crate::storage::KeyValueStore;
use leasedesk_engine::{ColumnKey, SortSpec};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Per-screen view preferences kept in the durable store
pub struct Preferences<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> Preferences<'a> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self { store }
    }

    fn sort_key<K: ColumnKey>() -> String {
        format!("sort.{}", K::SCREEN)
    }

    /// Remembered sort for the screen of `K`; unreadable entries count as none.
    pub fn sort<K>(&self) -> Option<SortSpec<K>>
    where
        K: ColumnKey + DeserializeOwned,
    {
        let raw = match self.store.get(&Self::sort_key::<K>()) {
            Ok(raw) => raw?,
            Err(err) => {
                tracing::warn!("Could not read {} sort preference: {}", K::SCREEN, err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(spec) => Some(spec),
            Err(err) => {
                tracing::warn!("Discarding malformed {} sort preference: {}", K::SCREEN, err);
                None
            }
        }
    }

    /// Same key flips direction, a new key starts ascending.
    pub fn toggle_sort<K>(&self, key: K) -> Result<SortSpec<K>>
    where
        K: ColumnKey + Serialize + DeserializeOwned,
    {
        let next = SortSpec::toggle(self.sort::<K>(), key);
        self.store
            .set(&Self::sort_key::<K>(), &serde_json::to_string(&next)?)?;
        Ok(next)
    }
}
