use super::*;

/// Tests creating a new event.
///
/// Verifies that the repository stores every field and never marks a new event as
/// featured.
///
/// Expected: Ok with unfeatured event
#[tokio::test]
async fn creates_unfeatured_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let repo = EventRepository::new(db);
    let event = repo
        .create(CreateEventParams {
            title: "Festival".to_string(),
            description: "D".to_string(),
            date,
            location: "Denver".to_string(),
            banner_url: Some("/uploads/1-poster.jpg".to_string()),
        })
        .await?;

    assert_eq!(event.title, "Festival");
    assert_eq!(event.date, date);
    assert_eq!(event.banner_url.as_deref(), Some("/uploads/1-poster.jpg"));
    assert!(!event.is_featured);

    let stored = Event::find_by_id(event.id).one(db).await?.unwrap();
    assert_eq!(stored.location, "Denver");

    Ok(())
}
