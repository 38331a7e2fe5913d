use crate::{client::model::error::ApiError, model::news::NewsDto};

use super::helper::get_json;

/// GET /api/news
/// Get all news items, newest first
pub async fn get_news() -> Result<Vec<NewsDto>, ApiError> {
    get_json("/api/news").await
}
