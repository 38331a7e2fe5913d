use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageDto {
    pub id: i32,
    pub caption: Option<String>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
