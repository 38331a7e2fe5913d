use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::news::{CreateNewsParams, News, UpdateNewsParams};

pub struct NewsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NewsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateNewsParams) -> Result<News, DbErr> {
        let news = entity::news::ActiveModel {
            title: ActiveValue::Set(params.title),
            content: ActiveValue::Set(params.content),
            banner_url: ActiveValue::Set(params.banner_url),
            date: ActiveValue::Set(params.date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(News::from_entity(news))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<News>, DbErr> {
        let news = entity::prelude::News::find_by_id(id).one(self.db).await?;

        Ok(news.map(News::from_entity))
    }

    /// Lists every news item, newest first.
    pub async fn list(&self) -> Result<Vec<News>, DbErr> {
        let news = entity::prelude::News::find()
            .order_by_desc(entity::news::Column::Date)
            .order_by_desc(entity::news::Column::Id)
            .all(self.db)
            .await?;

        Ok(news.into_iter().map(News::from_entity).collect())
    }

    /// Applies a partial update to a news item.
    ///
    /// # Returns
    /// - `Ok(News)`: The updated news item
    /// - `Err(DbErr::RecordNotFound)`: No news item with this ID
    pub async fn update(&self, id: i32, params: UpdateNewsParams) -> Result<News, DbErr> {
        let news = entity::prelude::News::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("News {} not found", id)))?;

        let mut active_model: entity::news::ActiveModel = news.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(content) = params.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(banner_url) = params.banner_url {
            active_model.banner_url = ActiveValue::Set(Some(banner_url));
        }

        let updated = active_model.update(self.db).await?;

        Ok(News::from_entity(updated))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::News::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
