use crate::{client::model::error::ApiError, model::gallery::GalleryImageDto};

use super::helper::get_json;

/// GET /api/gallery
/// Get all gallery images, most recent first
pub async fn get_gallery() -> Result<Vec<GalleryImageDto>, ApiError> {
    get_json("/api/gallery").await
}
