//! Event factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::event::EventFactory;
///
/// let event = EventFactory::new(&db)
///     .title("Teej Festival")
///     .date(Utc::now() + Duration::days(3))
///     .featured(true)
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: String,
    date: DateTime<Utc>,
    location: String,
    banner_url: Option<String>,
    is_featured: bool,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"` where id is auto-incremented
    /// - description: `"Test event description"`
    /// - date: 7 days from now
    /// - location: `"Denver, CO"`
    /// - banner_url: `None`
    /// - is_featured: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Event {}", id),
            description: "Test event description".to_string(),
            date: Utc::now() + Duration::days(7),
            location: "Denver, CO".to_string(),
            banner_url: None,
            is_featured: false,
        }
    }

    /// Sets the event title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the event description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the event date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Sets the event location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the banner URL.
    pub fn banner_url(mut self, banner_url: Option<String>) -> Self {
        self.banner_url = banner_url;
        self
    }

    /// Sets whether the event is featured.
    ///
    /// The factory writes the flag as given and does not clear other featured events.
    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Builds and inserts the event entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::event::Model)` - Created event entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            date: ActiveValue::Set(self.date),
            location: ActiveValue::Set(self.location),
            banner_url: ActiveValue::Set(self.banner_url),
            is_featured: ActiveValue::Set(self.is_featured),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
///
/// Shorthand for `EventFactory::new(db).build().await`.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

/// Creates an event scheduled at the given date.
///
/// Shorthand for `EventFactory::new(db).date(date).build().await`.
pub async fn create_event_at(
    db: &DatabaseConnection,
    date: DateTime<Utc>,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).date(date).build().await
}
