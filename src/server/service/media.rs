use dioxus_logger::tracing;

use crate::server::{error::AppError, model::upload::UploadedFile, storage::MediaStorage};

/// Stores an optional upload and returns its public URL.
pub async fn store_upload(
    storage: &dyn MediaStorage,
    file: Option<UploadedFile>,
) -> Result<Option<String>, AppError> {
    match file {
        Some(file) => Ok(Some(storage.store(file).await?)),
        None => Ok(None),
    }
}

/// Removes a stored file without failing the request.
///
/// Errors are logged and swallowed; the database is the source of truth and a leftover
/// file is harmless.
pub async fn discard_upload(storage: &dyn MediaStorage, url: &str) {
    if let Err(err) = storage.delete(url).await {
        tracing::warn!("Failed to remove stored media {}: {}", url, err);
    }
}

/// Removes the file that replaced `old`, unless both point at the same object.
pub async fn discard_replaced(storage: &dyn MediaStorage, old: Option<&str>, new: Option<&str>) {
    if let (Some(old), Some(new)) = (old, new) {
        if old != new {
            discard_upload(storage, old).await;
        }
    }
}

/// Undoes a store when the database write that should reference it fails.
pub async fn rollback_upload<T>(
    storage: &dyn MediaStorage,
    stored: Option<&str>,
    result: Result<T, AppError>,
) -> Result<T, AppError> {
    if result.is_err() {
        if let Some(url) = stored {
            discard_upload(storage, url).await;
        }
    }
    result
}
