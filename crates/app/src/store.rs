//! Generic read-modify-write access to collections.
//!
//! Every mutation loads the whole collection, changes it in memory and saves
//! the whole collection back. Mutations of one collection run inside that
//! collection's exclusive scope, so concurrent writers cannot lose each
//! other's updates. Reads take no lock.

use tokio::sync::{Mutex, MutexGuard};

use carwash_domain::collection::{Collection, Record};
use carwash_domain::error::{CarwashError, NotFoundError};
use carwash_domain::id::RecordId;

use crate::ports::CollectionStore;

/// One mutex per collection.
pub struct CollectionLocks {
    locks: [Mutex<()>; Collection::ALL.len()],
}

impl Default for CollectionLocks {
    fn default() -> Self {
        Self {
            locks: std::array::from_fn(|_| Mutex::new(())),
        }
    }
}

impl CollectionLocks {
    /// Wait for exclusive access to `collection`. Access ends when the guard
    /// is dropped.
    pub async fn acquire(&self, collection: Collection) -> MutexGuard<'_, ()> {
        self.locks[collection.index()].lock().await
    }
}

/// Id for the next record: one past the highest existing id, `1` when empty.
pub fn next_id<R: Record>(records: &[R]) -> R::Id {
    records
        .iter()
        .map(Record::id)
        .max()
        .map_or_else(|| R::Id::from_raw(1), RecordId::next)
}

/// Build the [`NotFoundError`] for a missing record of type `R`.
pub fn not_found<R: Record>(id: R::Id) -> CarwashError {
    NotFoundError {
        entity: R::LABEL,
        id: id.to_string(),
    }
    .into()
}

/// Collection access shared by every application service.
pub struct Store<S> {
    backend: S,
    locks: CollectionLocks,
}

impl<S> Store<S>
where
    S: CollectionStore + Send + Sync,
{
    /// Wrap a storage backend.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            locks: CollectionLocks::default(),
        }
    }

    /// Borrow the storage backend.
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load every record of `R`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the backend.
    pub async fn get_all<R: Record>(&self) -> Result<Vec<R>, CarwashError> {
        self.backend.load::<R>().await
    }

    /// Number of records of `R`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the backend.
    pub async fn count<R: Record>(&self) -> Result<usize, CarwashError> {
        Ok(self.get_all::<R>().await?.len())
    }

    /// Linear scan for the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the backend.
    pub async fn find_by_id<R: Record>(&self, id: R::Id) -> Result<Option<R>, CarwashError> {
        let records = self.get_all::<R>().await?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }

    /// Like [`Store::find_by_id`], failing when absent.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] when no record has `id`, or a
    /// storage error from the backend.
    pub async fn get<R: Record>(&self, id: R::Id) -> Result<R, CarwashError> {
        self.find_by_id::<R>(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Append a record built from the current contents and the next id.
    ///
    /// `build` may reject the record (e.g. on a uniqueness conflict); in
    /// that case nothing is written.
    ///
    /// # Errors
    ///
    /// Returns whatever `build` returns, or a storage error.
    pub async fn append<R, F>(&self, build: F) -> Result<R, CarwashError>
    where
        R: Record,
        F: FnOnce(&[R], R::Id) -> Result<R, CarwashError> + Send,
    {
        let _scope = self.locks.acquire(R::COLLECTION).await;
        let mut records = self.backend.load::<R>().await?;
        let id = next_id(&records);
        let record = build(&records, id)?;
        records.push(record.clone());
        self.backend.save(&records).await?;
        tracing::debug!(collection = %R::COLLECTION, id = %record.id(), "record appended");
        Ok(record)
    }

    /// Mutate the record with `id` in place.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] when no record has `id`, whatever
    /// `mutate` returns, or a storage error.
    pub async fn update<R, F>(&self, id: R::Id, mutate: F) -> Result<R, CarwashError>
    where
        R: Record,
        F: FnOnce(&mut R) -> Result<(), CarwashError> + Send,
    {
        let _scope = self.locks.acquire(R::COLLECTION).await;
        let mut records = self.backend.load::<R>().await?;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| not_found::<R>(id))?;
        mutate(record)?;
        let updated = record.clone();
        self.backend.save(&records).await?;
        tracing::debug!(collection = %R::COLLECTION, %id, "record updated");
        Ok(updated)
    }

    /// Remove exactly the record with `id` and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CarwashError::NotFound`] when no record has `id`, or a
    /// storage error.
    pub async fn delete<R: Record>(&self, id: R::Id) -> Result<R, CarwashError> {
        let _scope = self.locks.acquire(R::COLLECTION).await;
        let mut records = self.backend.load::<R>().await?;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| not_found::<R>(id))?;
        let removed = records.remove(index);
        self.backend.save(&records).await?;
        tracing::debug!(collection = %R::COLLECTION, %id, "record deleted");
        Ok(removed)
    }
}
