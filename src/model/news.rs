use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub banner_url: Option<String>,
    pub date: DateTime<Utc>,
}

/// JSON body of `DELETE /api/news`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DeleteNewsDto {
    pub id: Option<i32>,
}
