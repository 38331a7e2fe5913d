//! Gallery image domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::gallery::GalleryImageDto, server::model::upload::UploadedFile};

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: i32,
    pub caption: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

impl GalleryImage {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::gallery_image::Model) -> Self {
        Self {
            id: entity.id,
            caption: entity.caption,
            image_url: entity.image_url,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> GalleryImageDto {
        GalleryImageDto {
            id: self.id,
            caption: self.caption,
            image_url: self.image_url,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGalleryImageParams {
    pub caption: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Validated gallery upload form.
#[derive(Debug, Clone)]
pub struct NewGalleryImage {
    pub caption: Option<String>,
    pub image: UploadedFile,
}
