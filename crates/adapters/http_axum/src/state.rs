//! Shared application state for axum handlers.

use std::sync::Arc;

use carwash_app::ports::CollectionStore;
use carwash_app::services::catalog_service::CatalogService;
use carwash_app::services::customer_service::CustomerService;
use carwash_app::services::event_service::EventService;
use carwash_app::services::product_service::ProductService;
use carwash_app::services::user_service::{AdminSource, UserService};
use carwash_app::store::Store;

/// Application state shared across all axum handlers.
///
/// Generic over the storage backend to avoid dynamic dispatch. Every service
/// shares the same [`Store`], and therefore the same per-collection locks.
/// `Clone` is implemented manually so the backend itself does not need to be
/// `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<S> {
    /// Registration, login and admin listing.
    pub user_service: Arc<UserService<S>>,
    /// Customer profiles.
    pub customer_service: Arc<CustomerService<S>>,
    /// Wash service catalog.
    pub catalog_service: Arc<CatalogService<S>>,
    /// Bookings.
    pub event_service: Arc<EventService<S>>,
    /// Product inventory.
    pub product_service: Arc<ProductService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            customer_service: Arc::clone(&self.customer_service),
            catalog_service: Arc::clone(&self.catalog_service),
            event_service: Arc::clone(&self.event_service),
            product_service: Arc::clone(&self.product_service),
        }
    }
}

impl<S> AppState<S>
where
    S: CollectionStore + Send + Sync + 'static,
{
    /// Build every service on top of one shared store.
    pub fn new(store: Arc<Store<S>>, admin_source: AdminSource) -> Self {
        Self {
            user_service: Arc::new(UserService::new(Arc::clone(&store), admin_source)),
            customer_service: Arc::new(CustomerService::new(Arc::clone(&store))),
            catalog_service: Arc::new(CatalogService::new(Arc::clone(&store))),
            event_service: Arc::new(EventService::new(Arc::clone(&store))),
            product_service: Arc::new(ProductService::new(store)),
        }
    }
}
