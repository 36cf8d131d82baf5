//! Storage port: whole-collection load and save.

use std::future::Future;

use carwash_domain::collection::Record;
use carwash_domain::error::CarwashError;

/// Backing storage for collections of records.
///
/// Implementations read and write a collection as one unit; there are no
/// partial reads or indexes. Callers that modify a collection go through
/// [`Store`](crate::store::Store), which serializes writers.
pub trait CollectionStore {
    /// Read every record of `R::COLLECTION`.
    ///
    /// Fails with [`CarwashError::Storage`] when the collection is missing
    /// or cannot be decoded.
    fn load<R: Record>(&self) -> impl Future<Output = Result<Vec<R>, CarwashError>> + Send;

    /// Replace the stored contents of `R::COLLECTION` with `records`.
    fn save<R: Record>(
        &self,
        records: &[R],
    ) -> impl Future<Output = Result<(), CarwashError>> + Send;
}

impl<T: CollectionStore + Send + Sync> CollectionStore for std::sync::Arc<T> {
    fn load<R: Record>(&self) -> impl Future<Output = Result<Vec<R>, CarwashError>> + Send {
        (**self).load::<R>()
    }

    fn save<R: Record>(
        &self,
        records: &[R],
    ) -> impl Future<Output = Result<(), CarwashError>> + Send {
        (**self).save(records)
    }
}
