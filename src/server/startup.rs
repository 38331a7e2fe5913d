use std::sync::Arc;

use dioxus_logger::tracing;

use crate::server::{
    config::{Config, MediaBackend},
    error::AppError,
    storage::{LocalMediaStorage, MediaStorage, PlaceholderMediaStorage},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the media storage backend chosen by configuration.
///
/// The placeholder backend discards uploads, so it is announced with a warning.
pub fn setup_media_storage(config: &Config) -> Arc<dyn MediaStorage> {
    match config.media_backend {
        MediaBackend::Local => {
            tracing::info!(
                "Storing uploads in {} served under {}",
                config.upload_dir,
                config.upload_url_prefix
            );
            Arc::new(LocalMediaStorage::new(
                &config.upload_dir,
                &config.upload_url_prefix,
            ))
        }
        MediaBackend::Placeholder => {
            tracing::warn!(
                "Placeholder media storage active: uploads are discarded and replaced with {}",
                config.placeholder_image_url
            );
            Arc::new(PlaceholderMediaStorage::new(
                config.placeholder_image_url.clone(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::{
        model::contact::ContactDto,
        server::{
            config::DEFAULT_UPLOAD_MAX_BYTES,
            data::{event::EventRepository, gallery::GalleryImageRepository, news::NewsRepository},
            model::{
                event::{CreateEventParams, EventFilter},
                gallery::CreateGalleryImageParams,
                news::CreateNewsParams,
            },
        },
    };

    fn memory_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            media_backend: MediaBackend::Local,
            upload_dir: "public/uploads".to_string(),
            upload_url_prefix: "/uploads".to_string(),
            placeholder_image_url: "/uploads/demo-placeholder.jpg".to_string(),
            upload_max_bytes: DEFAULT_UPLOAD_MAX_BYTES,
            contact: ContactDto::default(),
        }
    }

    /// Exercises the schema created by the migrations rather than the entity-derived one.
    #[tokio::test]
    async fn migrated_schema_round_trips_timestamps() {
        let db = connect_to_database(&memory_config()).await.unwrap();

        let date = Utc.with_ymd_and_hms(2026, 1, 1, 18, 30, 0).unwrap();
        let now = date - Duration::days(1);

        let events = EventRepository::new(&db);
        let event = events
            .create(CreateEventParams {
                title: "Festival".to_string(),
                description: "D".to_string(),
                date,
                location: "Denver".to_string(),
                banner_url: None,
            })
            .await
            .unwrap();
        assert_eq!(event.date, date);

        let upcoming = events
            .list(EventFilter {
                upcoming: true,
                now,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, date);

        let featured = events.set_featured(event.id, true).await.unwrap();
        assert!(featured.is_featured);

        let news = NewsRepository::new(&db)
            .create(CreateNewsParams {
                title: "Hall opening".to_string(),
                content: "Doors open at noon".to_string(),
                banner_url: None,
                date,
            })
            .await
            .unwrap();
        assert_eq!(news.date, date);

        let image = GalleryImageRepository::new(&db)
            .create(CreateGalleryImageParams {
                caption: None,
                image_url: "/uploads/1-a.png".to_string(),
                created_at: date,
            })
            .await
            .unwrap();
        assert_eq!(image.created_at, date);
    }
}
