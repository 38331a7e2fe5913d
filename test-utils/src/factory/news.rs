//! News factory for creating test news entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test news items with customizable fields.
pub struct NewsFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    content: String,
    banner_url: Option<String>,
    date: DateTime<Utc>,
}

impl<'a> NewsFactory<'a> {
    /// Creates a new NewsFactory with default values.
    ///
    /// Defaults:
    /// - title: `"News {id}"` where id is auto-incremented
    /// - content: `"Test news content"`
    /// - banner_url: `None`
    /// - date: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("News {}", id),
            content: "Test news content".to_string(),
            banner_url: None,
            date: Utc::now(),
        }
    }

    /// Sets the news title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the news content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the banner URL.
    pub fn banner_url(mut self, banner_url: Option<String>) -> Self {
        self.banner_url = banner_url;
        self
    }

    /// Sets the publish date.
    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    /// Builds and inserts the news entity into the database.
    pub async fn build(self) -> Result<entity::news::Model, DbErr> {
        entity::news::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            banner_url: ActiveValue::Set(self.banner_url),
            date: ActiveValue::Set(self.date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a news item with default values.
pub async fn create_news(db: &DatabaseConnection) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).build().await
}

/// Creates a news item published at the given date.
pub async fn create_news_at(
    db: &DatabaseConnection,
    date: DateTime<Utc>,
) -> Result<entity::news::Model, DbErr> {
    NewsFactory::new(db).date(date).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_multiple_unique_news_items() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(News).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_news(db).await?;
        let second = create_news(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.title, second.title);
        assert_eq!(first.content, "Test news content");

        Ok(())
    }
}
