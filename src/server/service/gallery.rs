use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::gallery::GalleryImageRepository,
    error::AppError,
    model::gallery::{CreateGalleryImageParams, GalleryImage, NewGalleryImage},
    service::media::{discard_upload, rollback_upload},
    storage::MediaStorage,
};

pub struct GalleryService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn MediaStorage,
}

impl<'a> GalleryService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn MediaStorage) -> Self {
        Self { db, storage }
    }

    pub async fn create(&self, image: NewGalleryImage) -> Result<GalleryImage, AppError> {
        let image_url = self.storage.store(image.image).await?;

        let result = GalleryImageRepository::new(self.db)
            .create(CreateGalleryImageParams {
                caption: image.caption,
                image_url: image_url.clone(),
                created_at: Utc::now(),
            })
            .await
            .map_err(AppError::from);

        rollback_upload(self.storage, Some(&image_url), result).await
    }

    pub async fn list(&self) -> Result<Vec<GalleryImage>, AppError> {
        Ok(GalleryImageRepository::new(self.db).list().await?)
    }

    /// Deletes the image record, then its file.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = GalleryImageRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Image not found".to_string()))?;

        repo.delete(id).await?;
        discard_upload(self.storage, &existing.image_url).await;

        Ok(())
    }
}
