use super::*;

/// Tests creating a gallery image without a caption.
///
/// Expected: Ok with image URL stored and caption empty
#[tokio::test]
async fn creates_image_without_caption() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let image = GalleryImageRepository::new(db)
        .create(CreateGalleryImageParams {
            caption: None,
            image_url: "/uploads/1-dance.jpg".to_string(),
            created_at: Utc::now(),
        })
        .await?;

    let stored = GalleryImage::find_by_id(image.id).one(db).await?.unwrap();
    assert_eq!(stored.image_url, "/uploads/1-dance.jpg");
    assert!(stored.caption.is_none());

    Ok(())
}
