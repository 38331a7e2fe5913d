use super::*;

/// Tests that gallery images are listed most recent first.
///
/// Expected: images ordered by creation time descending
#[tokio::test]
async fn lists_most_recent_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::gallery_image::GalleryImageFactory::new(db)
        .created_at(now - Duration::hours(5))
        .build()
        .await?;
    let newer = factory::gallery_image::GalleryImageFactory::new(db)
        .created_at(now)
        .build()
        .await?;

    let images = GalleryImageRepository::new(db).list().await?;
    let ids: Vec<i32> = images.iter().map(|i| i.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
