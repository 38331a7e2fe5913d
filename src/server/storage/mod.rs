//! Media storage for uploaded images.
//!
//! Handlers and services only see the `MediaStorage` trait. The concrete backend is picked
//! once at startup from configuration and shared through `AppState` as
//! `Arc<dyn MediaStorage>`.

pub mod local;
pub mod placeholder;

use async_trait::async_trait;

use crate::server::{error::storage::StorageError, model::upload::UploadedFile};

pub use local::LocalMediaStorage;
pub use placeholder::PlaceholderMediaStorage;

#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Persists the file and returns the public URL it can be fetched from.
    async fn store(&self, file: UploadedFile) -> Result<String, StorageError>;

    /// Removes the object behind `url`. Unknown or already-removed objects are not an error.
    async fn delete(&self, url: &str) -> Result<(), StorageError>;
}
