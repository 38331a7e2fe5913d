use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GalleryImage::Table)
                    .if_not_exists()
                    .col(pk_auto(GalleryImage::Id))
                    .col(string_null(GalleryImage::Caption))
                    .col(string(GalleryImage::ImageUrl))
                    .col(
                        timestamp_with_time_zone(GalleryImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GalleryImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GalleryImage {
    Table,
    Id,
    Caption,
    ImageUrl,
    CreatedAt,
}
