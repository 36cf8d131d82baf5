//! In-memory [`CollectionStore`] fake for service tests.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use carwash_domain::collection::{Collection, Record};
use carwash_domain::error::CarwashError;

use crate::ports::CollectionStore;

/// Keeps each collection as a JSON value. Loading yields to the scheduler
/// before returning, so unsynchronized read-modify-write cycles interleave.
#[derive(Default)]
pub(crate) struct FakeStore {
    collections: Mutex<HashMap<Collection, serde_json::Value>>,
    saves: AtomicUsize,
}

impl FakeStore {
    pub(crate) fn seed<R: Record>(&self, records: Vec<R>) {
        let value = serde_json::to_value(records).unwrap();
        self.collections
            .lock()
            .unwrap()
            .insert(R::COLLECTION, value);
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

fn storage_error(err: serde_json::Error) -> CarwashError {
    CarwashError::Storage(Box::new(err))
}

impl CollectionStore for FakeStore {
    fn load<R: Record>(&self) -> impl Future<Output = Result<Vec<R>, CarwashError>> + Send {
        let snapshot = self
            .collections
            .lock()
            .unwrap()
            .get(&R::COLLECTION)
            .cloned();
        async move {
            tokio::task::yield_now().await;
            match snapshot {
                Some(value) => serde_json::from_value(value).map_err(storage_error),
                None => Ok(Vec::new()),
            }
        }
    }

    fn save<R: Record>(
        &self,
        records: &[R],
    ) -> impl Future<Output = Result<(), CarwashError>> + Send {
        let result = serde_json::to_value(records).map_err(storage_error).map(|value| {
            self.collections
                .lock()
                .unwrap()
                .insert(R::COLLECTION, value);
            self.saves.fetch_add(1, Ordering::SeqCst);
        });
        async move { result }
    }
}
