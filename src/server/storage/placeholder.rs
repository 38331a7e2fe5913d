use async_trait::async_trait;

use crate::server::{
    error::storage::StorageError, model::upload::UploadedFile, storage::MediaStorage,
};

/// Backend for deployments without writable storage.
///
/// Uploaded bytes are discarded and every stored file resolves to the same placeholder
/// image URL.
pub struct PlaceholderMediaStorage {
    url: String,
}

impl PlaceholderMediaStorage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl MediaStorage for PlaceholderMediaStorage {
    async fn store(&self, _file: UploadedFile) -> Result<String, StorageError> {
        Ok(self.url.clone())
    }

    async fn delete(&self, _url: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_url_for_every_upload() {
        let storage = PlaceholderMediaStorage::new("/uploads/demo-placeholder.jpg");

        let first = storage
            .store(UploadedFile::new("a.jpg", b"one".to_vec()))
            .await
            .unwrap();
        let second = storage
            .store(UploadedFile::new("b.png", b"two".to_vec()))
            .await
            .unwrap();

        assert_eq!(first, "/uploads/demo-placeholder.jpg");
        assert_eq!(second, first);
        assert!(storage.delete(&first).await.is_ok());
    }
}
