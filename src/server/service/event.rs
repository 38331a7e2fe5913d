use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    model::event::{CreateEventParams, Event, EventEdit, EventFilter, NewEvent, UpdateEventParams},
    service::{
        media::{discard_replaced, discard_upload, rollback_upload, store_upload},
        not_found_as,
    },
    storage::MediaStorage,
};

const EVENT_NOT_FOUND: &str = "Event not found";

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn MediaStorage,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Creates an event, storing its banner first when one was uploaded.
    pub async fn create(&self, event: NewEvent) -> Result<Event, AppError> {
        let banner_url = store_upload(self.storage, event.image).await?;

        let result = EventRepository::new(self.db)
            .create(CreateEventParams {
                title: event.title,
                description: event.description,
                date: event.date,
                location: event.location,
                banner_url: banner_url.clone(),
            })
            .await
            .map_err(AppError::from);

        rollback_upload(self.storage, banner_url.as_deref(), result).await
    }

    pub async fn list(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        Ok(EventRepository::new(self.db).list(filter).await?)
    }

    /// Applies a form edit. A new banner replaces the old one, whose file is then removed.
    pub async fn update(&self, id: i32, edit: EventEdit) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))?;

        let banner_url = store_upload(self.storage, edit.image).await?;

        let result = repo
            .update(
                id,
                UpdateEventParams {
                    title: edit.title,
                    description: edit.description,
                    date: edit.date,
                    location: edit.location,
                    banner_url: banner_url.clone(),
                },
            )
            .await
            .map_err(not_found_as(EVENT_NOT_FOUND));
        let updated = rollback_upload(self.storage, banner_url.as_deref(), result).await?;

        discard_replaced(
            self.storage,
            existing.banner_url.as_deref(),
            banner_url.as_deref(),
        )
        .await;

        Ok(updated)
    }

    /// Sets the featured flag. Featuring an event unfeatures all others.
    pub async fn set_featured(&self, id: i32, is_featured: bool) -> Result<Event, AppError> {
        EventRepository::new(self.db)
            .set_featured(id, is_featured)
            .await
            .map_err(not_found_as(EVENT_NOT_FOUND))
    }

    /// Deletes an event and then its banner file.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))?;

        repo.delete(id).await?;

        if let Some(url) = existing.banner_url.as_deref() {
            discard_upload(self.storage, url).await;
        }

        Ok(())
    }
}
