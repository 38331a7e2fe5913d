use super::*;

/// Tests a partial news update.
///
/// Expected: Ok with content and banner replaced, title and date kept
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::news::NewsFactory::new(db)
        .title("Kept title")
        .build()
        .await?;

    let updated = NewsRepository::new(db)
        .update(
            original.id,
            UpdateNewsParams {
                content: Some("New content".to_string()),
                banner_url: Some("/uploads/2-new.jpg".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Kept title");
    assert_eq!(updated.content, "New content");
    assert_eq!(updated.banner_url.as_deref(), Some("/uploads/2-new.jpg"));
    assert_eq!(updated.date, original.date);

    Ok(())
}

/// Tests updating a news item that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_news() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NewsRepository::new(db)
        .update(42, UpdateNewsParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
