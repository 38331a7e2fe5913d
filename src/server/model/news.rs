//! News domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::news::NewsDto, server::model::upload::UploadedFile};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub banner_url: Option<String>,
    pub date: DateTime<Utc>,
}

impl News {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::news::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            content: entity.content,
            banner_url: entity.banner_url,
            date: entity.date,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            id: self.id,
            title: self.title,
            content: self.content,
            banner_url: self.banner_url,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsParams {
    pub title: String,
    pub content: String,
    pub banner_url: Option<String>,
    pub date: DateTime<Utc>,
}

/// Partial update applied to an existing news row. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateNewsParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub banner_url: Option<String>,
}

/// Validated fields from the news create form.
#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: String,
    pub content: String,
    pub image: Option<UploadedFile>,
}

/// Fields from the news edit form.
#[derive(Debug, Clone, Default)]
pub struct NewsEdit {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<UploadedFile>,
}
