use super::*;

/// Tests the default listing order.
///
/// Expected: all events, newest date first
#[tokio::test]
async fn lists_all_events_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let past = factory::create_event_at(db, now - Duration::days(3)).await?;
    let soon = factory::create_event_at(db, now + Duration::days(1)).await?;
    let later = factory::create_event_at(db, now + Duration::days(9)).await?;

    let events = EventRepository::new(db)
        .list(EventFilter {
            now,
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![later.id, soon.id, past.id]);

    Ok(())
}

/// Tests filtering for upcoming events.
///
/// Expected: only events dated at or after now, oldest first
#[tokio::test]
async fn upcoming_returns_future_events_ascending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::create_event_at(db, now - Duration::days(1)).await?;
    let later = factory::create_event_at(db, now + Duration::days(20)).await?;
    let soon = factory::create_event_at(db, now + Duration::days(2)).await?;

    let events = EventRepository::new(db)
        .list(EventFilter {
            upcoming: true,
            now,
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![soon.id, later.id]);
    assert!(events.iter().all(|e| e.date >= now));

    Ok(())
}

/// Tests filtering for featured events.
///
/// Expected: only the featured event
#[tokio::test]
async fn featured_returns_only_featured_events() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_event(db).await?;
    let featured = factory::event::EventFactory::new(db)
        .featured(true)
        .build()
        .await?;

    let events = EventRepository::new(db)
        .list(EventFilter {
            featured: true,
            now: Utc::now(),
            ..Default::default()
        })
        .await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, featured.id);

    Ok(())
}

/// Tests capping the result count.
///
/// Expected: at most `limit` events, taken from the head of the ordering
#[tokio::test]
async fn limit_caps_result_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Event).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let first = factory::create_event_at(db, now + Duration::days(1)).await?;
    let second = factory::create_event_at(db, now + Duration::days(2)).await?;
    factory::create_event_at(db, now + Duration::days(3)).await?;

    let events = EventRepository::new(db)
        .list(EventFilter {
            upcoming: true,
            limit: Some(2),
            now,
            ..Default::default()
        })
        .await?;
    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
