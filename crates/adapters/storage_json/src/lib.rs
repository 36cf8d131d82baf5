//! # carwash-adapter-storage-json
//!
//! Persistence adapter storing each collection as one JSON array file.
//!
//! ## Responsibilities
//! - Implement the storage port defined in `carwash-app::ports::storage`
//! - Map each collection to `<data_dir>/<collection>.json`
//! - Bootstrap the data directory and empty collection files at startup
//! - Replace files atomically (write to a temporary file, then rename)
//! - Provide an in-memory implementation for tests and demos
//!
//! ## Dependency rule
//! Depends on `carwash-app` (for the port trait) and `carwash-domain` (for
//! record types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod json_file_store;
pub mod memory_store;

pub use error::StorageError;
pub use json_file_store::{Config, JsonFileStore};
pub use memory_store::InMemoryStore;
