//! Event domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::event::EventDto, server::model::upload::UploadedFile};

/// A calendar event as stored in the database.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub banner_url: Option<String>,
    pub is_featured: bool,
}

impl Event {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            date: entity.date,
            location: entity.location,
            banner_url: entity.banner_url,
            is_featured: entity.is_featured,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            banner_url: self.banner_url,
            is_featured: self.is_featured,
        }
    }
}

/// Filters accepted by the event list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    /// Only return featured events.
    pub featured: bool,
    /// Only return events dated on or after `now`, oldest first.
    pub upcoming: bool,
    /// Maximum number of events returned; `None` returns every match.
    pub limit: Option<u64>,
    /// Reference time for `upcoming`.
    pub now: DateTime<Utc>,
}

/// Parameters for inserting a new event row.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub banner_url: Option<String>,
}

/// Partial update applied to an existing event row. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub banner_url: Option<String>,
}

/// Validated fields from the event create form, plus the optional banner upload.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub image: Option<UploadedFile>,
}

/// Fields from the event edit form. Absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct EventEdit {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub image: Option<UploadedFile>,
}
