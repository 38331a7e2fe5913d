use super::*;

/// Tests that a partial update only touches the provided fields.
///
/// Expected: Ok with title and location replaced, everything else kept
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::event::EventFactory::new(db)
        .description("Original description")
        .banner_url(Some("/uploads/1-old.jpg".to_string()))
        .build()
        .await?;

    let updated = EventRepository::new(db)
        .update(
            original.id,
            UpdateEventParams {
                title: Some("Renamed".to_string()),
                location: Some("Boulder".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.location, "Boulder");
    assert_eq!(updated.description, "Original description");
    assert_eq!(updated.date, original.date);
    assert_eq!(updated.banner_url.as_deref(), Some("/uploads/1-old.jpg"));

    Ok(())
}

/// Tests updating an event that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EventRepository::new(db)
        .update(999, UpdateEventParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
