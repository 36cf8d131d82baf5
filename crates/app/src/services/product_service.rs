//! Product service: inventory CRUD.

use std::sync::Arc;

use carwash_domain::error::CarwashError;
use carwash_domain::id::ProductId;
use carwash_domain::product::{Product, ProductDraft};

use crate::ports::CollectionStore;
use crate::store::Store;

/// Application service for product CRUD operations.
pub struct ProductService<S> {
    store: Arc<Store<S>>,
}

impl<S> ProductService<S>
where
    S: CollectionStore + Send + Sync,
{
    /// Create a new service backed by the given store.
    pub fn new(store: Arc<Store<S>>) -> Self {
        Self { store }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list(&self) -> Result<Vec<Product>, CarwashError> {
        self.store.get_all::<Product>().await
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] when no product with `id` exists,
    /// or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Product, CarwashError> {
        self.store.get::<Product>(id).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] if the draft is invalid, or a
    /// storage error.
    #[tracing::instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, CarwashError> {
        draft.validate()?;
        self.store
            .append::<Product, _>(move |_, id| Ok(draft.into_product(id)))
            .await
    }

    /// Replace every field of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::Validation`] if the draft is invalid,
    /// [`CarwashError::NotFound`] if the product does not exist, or a storage
    /// error.
    #[tracing::instrument(skip(self, draft))]
    pub async fn replace(
        &self,
        id: ProductId,
        draft: ProductDraft,
    ) -> Result<Product, CarwashError> {
        draft.validate()?;
        self.store
            .update::<Product, _>(id, move |product| {
                product.replace_with(draft);
                Ok(())
            })
            .await
    }

    /// Delete a product and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] if the product does not exist, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Product, CarwashError> {
        self.store.delete::<Product>(id).await
    }
}
