//! Single-slot snapshot cache for the record set.
//!
//! One string key holds the record snapshot as serialized JSON text, written
//! once after the startup fetch and read on every search.

use std::collections::HashMap;

use radius_core::Record;

use crate::error::SearchError;

pub(crate) const SNAPSHOT_KEY: &str = "cachedLeads";

/// String-keyed store of serialized snapshots.
#[derive(Debug, Default)]
pub struct SnapshotCache {
    slots: HashMap<String, String>,
}

impl SnapshotCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the record snapshot into the cache slot, replacing any
    /// previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Snapshot`] if serialization fails.
    pub fn store(&mut self, records: &[Record]) -> Result<(), SearchError> {
        let serialized = serde_json::to_string(records)?;
        self.slots.insert(SNAPSHOT_KEY.to_owned(), serialized);
        Ok(())
    }

    /// Loads the record snapshot. `Ok(None)` means nothing has been stored
    /// yet.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Snapshot`] if the stored text is not a valid
    /// snapshot.
    pub fn load(&self) -> Result<Option<Vec<Record>>, SearchError> {
        self.slots
            .get(SNAPSHOT_KEY)
            .map(|serialized| serde_json::from_str(serialized).map_err(SearchError::from))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use radius_core::Coordinate;

    use super::*;

    fn record(id: &str) -> Record {
        Record {
            id: id.to_owned(),
            name: "Acme".to_owned(),
            phone: None,
            availability: None,
            base_rate: None,
            street: "1 Main St".to_owned(),
            city: "X".to_owned(),
            state: "FL".to_owned(),
            zip: None,
            address: "1 Main St, X, FL".to_owned(),
            position: Coordinate {
                latitude: 28.0,
                longitude: -81.0,
            },
        }
    }

    #[test]
    fn empty_cache_loads_none() {
        let cache = SnapshotCache::new();
        assert!(cache.load().unwrap().is_none());
    }

    #[test]
    fn store_then_load_round_trips_the_snapshot() {
        let mut cache = SnapshotCache::new();
        cache.store(&[record("a"), record("b")]).unwrap();

        let loaded = cache.load().unwrap().expect("snapshot should be present");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "a");
        assert_eq!(loaded[1].id, "b");
    }

    #[test]
    fn store_replaces_previous_snapshot() {
        let mut cache = SnapshotCache::new();
        cache.store(&[record("a")]).unwrap();
        cache.store(&[record("b")]).unwrap();

        let loaded = cache.load().unwrap().expect("snapshot should be present");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "b");
    }
}
