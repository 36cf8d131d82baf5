//! File-backed [`CollectionStore`]: one pretty-printed JSON array per
//! collection.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use carwash_app::ports::CollectionStore;
use carwash_domain::collection::{Collection, Record};
use carwash_domain::error::CarwashError;

use crate::error::StorageError;

/// Configuration for the JSON storage adapter.
pub struct Config {
    /// Directory holding the `<collection>.json` files.
    pub data_dir: PathBuf,
}

impl Config {
    /// Build a [`JsonFileStore`] from this configuration.
    ///
    /// Creates the data directory and an empty file for every collection
    /// that does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory or a file cannot be created.
    pub async fn build(self) -> Result<JsonFileStore, StorageError> {
        let store = JsonFileStore::new(self.data_dir);
        store.bootstrap().await?;
        Ok(store)
    }
}

/// Stores each collection as `<data_dir>/<collection>.json`.
///
/// Loading a file that does not exist is an error; use
/// [`JsonFileStore::bootstrap`] (or [`Config::build`]) at startup.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `data_dir` without touching the filesystem.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Directory holding the collection files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `collection`.
    #[must_use]
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection.name()))
    }

    /// Create the data directory and write `[]` for each missing collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory or a file cannot be
    /// created.
    pub async fn bootstrap(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StorageError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        for collection in Collection::ALL {
            let path = self.path_for(collection);
            let exists = fs::try_exists(&path)
                .await
                .map_err(|source| StorageError::Io {
                    path: path.clone(),
                    source,
                })?;
            if !exists {
                self.replace_file(collection, b"[]".to_vec()).await?;
                tracing::info!(
                    %collection,
                    path = %path.display(),
                    "created empty collection file"
                );
            }
        }
        Ok(())
    }

    async fn read<R: Record>(&self) -> Result<Vec<R>, StorageError> {
        let path = self.path_for(R::COLLECTION);
        let bytes = fs::read(&path).await.map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        let records: Vec<R> =
            serde_json::from_slice(&bytes).map_err(|source| StorageError::Json { path, source })?;
        tracing::debug!(collection = %R::COLLECTION, count = records.len(), "collection loaded");
        Ok(records)
    }

    async fn write<R: Record>(&self, records: &[R]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|source| StorageError::Encode {
            collection: R::COLLECTION,
            source,
        })?;
        self.replace_file(R::COLLECTION, bytes).await?;
        tracing::debug!(collection = %R::COLLECTION, count = records.len(), "collection saved");
        Ok(())
    }

    /// Write `bytes` next to the target, flush them to disk, then rename over
    /// the target.
    async fn replace_file(
        &self,
        collection: Collection,
        bytes: Vec<u8>,
    ) -> Result<(), StorageError> {
        let path = self.path_for(collection);
        let tmp = self
            .data_dir
            .join(format!(".{}.{}.tmp", collection.name(), uuid::Uuid::new_v4()));

        if let Err(source) = write_synced(&tmp, &bytes).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StorageError::Io { path: tmp, source });
        }

        if let Err(source) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(StorageError::Io { path, source });
        }
        Ok(())
    }
}

/// Create `path` and write `bytes`, returning only once the data is durable.
async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

impl CollectionStore for JsonFileStore {
    async fn load<R: Record>(&self) -> Result<Vec<R>, CarwashError> {
        Ok(self.read::<R>().await?)
    }

    async fn save<R: Record>(&self, records: &[R]) -> Result<(), CarwashError> {
        Ok(self.write(records).await?)
    }
}
