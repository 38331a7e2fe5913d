use super::*;

/// Tests that featuring an event unfeatures the previously featured one.
///
/// Expected: exactly one featured event, the newly featured one
#[tokio::test]
async fn featuring_event_clears_previous_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let previous = factory::event::EventFactory::new(db)
        .featured(true)
        .build()
        .await?;
    let next = factory::create_event(db).await?;

    let updated = EventRepository::new(db).set_featured(next.id, true).await?;

    assert!(updated.is_featured);

    let featured = Event::find()
        .filter(entity::event::Column::IsFeatured.eq(true))
        .all(db)
        .await?;
    assert_eq!(featured.len(), 1);
    assert_eq!(featured[0].id, next.id);

    let previous = Event::find_by_id(previous.id).one(db).await?.unwrap();
    assert!(!previous.is_featured);

    Ok(())
}

/// Tests unfeaturing an event.
///
/// Expected: flag cleared, other events untouched
#[tokio::test]
async fn unfeaturing_leaves_other_events_alone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let featured = factory::event::EventFactory::new(db)
        .featured(true)
        .build()
        .await?;
    let other = factory::create_event(db).await?;

    let updated = EventRepository::new(db).set_featured(other.id, false).await?;

    assert!(!updated.is_featured);
    let featured = Event::find_by_id(featured.id).one(db).await?.unwrap();
    assert!(featured.is_featured);

    Ok(())
}

/// Tests featuring an event that does not exist.
///
/// Expected: Err(RecordNotFound) and the current featured event is kept
#[tokio::test]
async fn unknown_event_keeps_current_featured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let featured = factory::event::EventFactory::new(db)
        .featured(true)
        .build()
        .await?;

    let result = EventRepository::new(db).set_featured(999, true).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    let featured = Event::find_by_id(featured.id).one(db).await?.unwrap();
    assert!(featured.is_featured);

    Ok(())
}
