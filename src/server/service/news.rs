use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::news::NewsRepository,
    error::AppError,
    model::news::{CreateNewsParams, News, NewsEdit, NewNews, UpdateNewsParams},
    service::{
        media::{discard_replaced, discard_upload, rollback_upload, store_upload},
        not_found_as,
    },
    storage::MediaStorage,
};

pub struct NewsService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a dyn MediaStorage,
}

impl<'a> NewsService<'a> {
    pub fn new(db: &'a DatabaseConnection, storage: &'a dyn MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Publishes a news item dated now.
    pub async fn create(&self, news: NewNews) -> Result<News, AppError> {
        let banner_url = store_upload(self.storage, news.image).await?;

        let result = NewsRepository::new(self.db)
            .create(CreateNewsParams {
                title: news.title,
                content: news.content,
                banner_url: banner_url.clone(),
                date: Utc::now(),
            })
            .await
            .map_err(AppError::from);

        rollback_upload(self.storage, banner_url.as_deref(), result).await
    }

    pub async fn list(&self) -> Result<Vec<News>, AppError> {
        Ok(NewsRepository::new(self.db).list().await?)
    }

    pub async fn update(&self, id: i32, edit: NewsEdit) -> Result<News, AppError> {
        const NOT_FOUND: &str = "News item not found";

        let repo = NewsRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let banner_url = store_upload(self.storage, edit.image).await?;

        let result = repo
            .update(
                id,
                UpdateNewsParams {
                    title: edit.title,
                    content: edit.content,
                    banner_url: banner_url.clone(),
                },
            )
            .await
            .map_err(not_found_as(NOT_FOUND));
        let updated = rollback_upload(self.storage, banner_url.as_deref(), result).await?;

        discard_replaced(
            self.storage,
            existing.banner_url.as_deref(),
            banner_url.as_deref(),
        )
        .await;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = NewsRepository::new(self.db);

        let existing = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("News not found".to_string()))?;

        repo.delete(id).await?;

        if let Some(url) = existing.banner_url.as_deref() {
            discard_upload(self.storage, url).await;
        }

        Ok(())
    }
}
