use crate::{client::model::error::ApiError, model::event::EventDto};

use super::helper::get_json;

/// GET /api/events
/// Get every event, newest first
pub async fn get_events() -> Result<Vec<EventDto>, ApiError> {
    get_json("/api/events").await
}
