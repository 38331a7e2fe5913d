use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::gallery::{CreateGalleryImageParams, GalleryImage};

pub struct GalleryImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GalleryImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateGalleryImageParams) -> Result<GalleryImage, DbErr> {
        let image = entity::gallery_image::ActiveModel {
            caption: ActiveValue::Set(params.caption),
            image_url: ActiveValue::Set(params.image_url),
            created_at: ActiveValue::Set(params.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(GalleryImage::from_entity(image))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<GalleryImage>, DbErr> {
        let image = entity::prelude::GalleryImage::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(image.map(GalleryImage::from_entity))
    }

    /// Lists every gallery image, most recently uploaded first.
    pub async fn list(&self) -> Result<Vec<GalleryImage>, DbErr> {
        let images = entity::prelude::GalleryImage::find()
            .order_by_desc(entity::gallery_image::Column::CreatedAt)
            .order_by_desc(entity::gallery_image::Column::Id)
            .all(self.db)
            .await?;

        Ok(images.into_iter().map(GalleryImage::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::GalleryImage::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
