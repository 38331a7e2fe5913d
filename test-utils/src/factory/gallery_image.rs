//! Gallery image factory for creating test gallery entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test gallery images with customizable fields.
pub struct GalleryImageFactory<'a> {
    db: &'a DatabaseConnection,
    caption: Option<String>,
    image_url: String,
    created_at: DateTime<Utc>,
}

impl<'a> GalleryImageFactory<'a> {
    /// Creates a new GalleryImageFactory with default values.
    ///
    /// Defaults:
    /// - caption: `Some("Photo {id}")` where id is auto-incremented
    /// - image_url: `"/uploads/photo-{id}.jpg"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            caption: Some(format!("Photo {}", id)),
            image_url: format!("/uploads/photo-{}.jpg", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the caption.
    pub fn caption(mut self, caption: Option<String>) -> Self {
        self.caption = caption;
        self
    }

    /// Sets the image URL.
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the gallery image entity into the database.
    pub async fn build(self) -> Result<entity::gallery_image::Model, DbErr> {
        entity::gallery_image::ActiveModel {
            id: ActiveValue::NotSet,
            caption: ActiveValue::Set(self.caption),
            image_url: ActiveValue::Set(self.image_url),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a gallery image with default values.
pub async fn create_gallery_image(
    db: &DatabaseConnection,
) -> Result<entity::gallery_image::Model, DbErr> {
    GalleryImageFactory::new(db).build().await
}
