use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use dioxus_logger::tracing;

use crate::server::{
    error::storage::StorageError, model::upload::UploadedFile, storage::MediaStorage,
};

/// Writes uploads into a directory on local disk that is served back under a public prefix.
pub struct LocalMediaStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalMediaStorage {
    /// Creates a backend writing to `root` and producing URLs under `public_prefix`.
    ///
    /// The directory is created lazily on the first store.
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Maps a public URL back to a file inside the upload directory.
    ///
    /// Returns `None` for URLs under a different prefix or ones that would escape the
    /// directory.
    fn path_for_url(&self, url: &str) -> Option<PathBuf> {
        let name = url.strip_prefix(&self.public_prefix)?.strip_prefix('/')?;

        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return None;
        }

        Some(self.root.join(name))
    }
}

#[async_trait]
impl MediaStorage for LocalMediaStorage {
    async fn store(&self, file: UploadedFile) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StorageError::Io {
                path: self.root.display().to_string(),
                source,
            })?;

        let name = stored_file_name(Utc::now().timestamp_millis(), &file.file_name);
        let path = self.root.join(&name);

        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|source| StorageError::Io {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!("Stored upload {} ({} bytes)", name, file.bytes.len());

        Ok(format!("{}/{}", self.public_prefix, name))
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        let Some(path) = self.path_for_url(url) else {
            return Ok(());
        };

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

/// Builds the on-disk name for an upload: `<millis>-<base name>` with every run of
/// whitespace in the base name collapsed into a single underscore.
pub fn stored_file_name(millis: i64, original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|b| !b.is_empty() && *b != "." && *b != "..")
        .unwrap_or("upload");

    let mut sanitized = String::with_capacity(base.len());
    let mut in_whitespace = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                sanitized.push('_');
            }
            in_whitespace = true;
        } else {
            sanitized.push(c);
            in_whitespace = false;
        }
    }

    format!("{}-{}", millis, sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            stored_file_name(1700000000000, "summer  fest\tposter.jpg"),
            "1700000000000-summer_fest_poster.jpg"
        );
        assert_eq!(stored_file_name(5, " lead.png"), "5-_lead.png");
    }

    #[test]
    fn drops_directory_components() {
        assert_eq!(stored_file_name(1, "../../etc/passwd"), "1-passwd");
        assert_eq!(stored_file_name(1, "C:\\photos\\a b.png"), "1-a_b.png");
        assert_eq!(stored_file_name(1, "dir/"), "1-upload");
    }

    #[tokio::test]
    async fn stores_file_and_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path().join("uploads"), "/uploads/");

        let url = storage
            .store(UploadedFile::new("my photo.jpg", b"jpeg".to_vec()))
            .await
            .unwrap();

        assert!(url.starts_with("/uploads/"));
        assert!(url.ends_with("-my_photo.jpg"));

        let name = url.trim_start_matches("/uploads/");
        let written = tokio::fs::read(dir.path().join("uploads").join(name))
            .await
            .unwrap();
        assert_eq!(written, b"jpeg");
    }

    #[tokio::test]
    async fn delete_removes_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/uploads");

        let url = storage
            .store(UploadedFile::new("a.png", b"png".to_vec()))
            .await
            .unwrap();
        let path = storage.path_for_url(&url).unwrap();
        assert!(path.exists());

        storage.delete(&url).await.unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn delete_ignores_missing_and_foreign_urls() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalMediaStorage::new(dir.path(), "/uploads");

        assert!(storage.delete("/uploads/1-gone.png").await.is_ok());
        assert!(storage.delete("https://cdn.example.com/a.png").await.is_ok());
        assert!(storage.delete("/uploads/../secret").await.is_ok());
        assert!(storage.path_for_url("/uploads/../secret").is_none());
    }
}
