//! In-memory [`CollectionStore`] for tests and throwaway demos.

use std::collections::HashMap;

use tokio::sync::RwLock;

use carwash_app::ports::CollectionStore;
use carwash_domain::collection::{Collection, Record};
use carwash_domain::error::CarwashError;

use crate::error::StorageError;

/// Keeps every collection as a JSON value in memory.
///
/// A collection that was never saved loads as empty. Records go through the
/// same serde representation as on disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, serde_json::Value>>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for InMemoryStore {
    async fn load<R: Record>(&self) -> Result<Vec<R>, CarwashError> {
        let snapshot = self.collections.read().await.get(&R::COLLECTION).cloned();
        let Some(value) = snapshot else {
            return Ok(Vec::new());
        };
        let records = serde_json::from_value(value).map_err(|source| StorageError::Encode {
            collection: R::COLLECTION,
            source,
        })?;
        Ok(records)
    }

    async fn save<R: Record>(&self, records: &[R]) -> Result<(), CarwashError> {
        let value = serde_json::to_value(records).map_err(|source| StorageError::Encode {
            collection: R::COLLECTION,
            source,
        })?;
        self.collections.write().await.insert(R::COLLECTION, value);
        Ok(())
    }
}
