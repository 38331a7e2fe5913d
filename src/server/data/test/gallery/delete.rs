use super::*;

/// Tests that a deleted image no longer appears in the list.
///
/// Expected: Ok with remaining images only
#[tokio::test]
async fn deleted_image_is_not_listed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(GalleryImage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_gallery_image(db).await?;
    let kept = factory::create_gallery_image(db).await?;

    let repo = GalleryImageRepository::new(db);
    repo.delete(doomed.id).await?;

    let ids: Vec<i32> = repo.list().await?.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![kept.id]);

    Ok(())
}
