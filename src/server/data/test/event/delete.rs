use super::*;

/// Tests deleting an event by ID.
///
/// Expected: Ok with only the targeted event removed
#[tokio::test]
async fn deletes_event_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = factory::create_event(db).await?;
    let kept = factory::create_event(db).await?;

    EventRepository::new(db).delete(doomed.id).await?;

    assert!(Event::find_by_id(doomed.id).one(db).await?.is_none());
    assert!(Event::find_by_id(kept.id).one(db).await?.is_some());
    assert_eq!(Event::find().count(db).await?, 1);

    Ok(())
}
