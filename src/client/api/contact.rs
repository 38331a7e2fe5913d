use crate::{client::model::error::ApiError, model::contact::ContactDto};

use super::helper::get_json;

/// GET /api/contact
pub async fn get_contact() -> Result<ContactDto, ApiError> {
    get_json("/api/contact").await
}
