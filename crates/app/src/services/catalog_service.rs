//! Catalog service: the read-only list of wash services.

use std::sync::Arc;

use carwash_domain::error::CarwashError;
use carwash_domain::service::Service;

use crate::ports::CollectionStore;
use crate::store::Store;

/// Application service for the service catalog.
pub struct CatalogService<S> {
    store: Arc<Store<S>>,
}

impl<S> CatalogService<S>
where
    S: CollectionStore + Send + Sync,
{
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<Store<S>>) -> Self {
        Self { store }
    }

    /// The catalog as stored.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(&self) -> Result<Vec<Service>, CarwashError> {
        self.store.get_all::<Service>().await
    }

    /// Number of catalog entries.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn count(&self) -> Result<usize, CarwashError> {
        self.store.count::<Service>().await
    }
}
