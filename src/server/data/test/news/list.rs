use super::*;

/// Tests that news is listed newest first.
///
/// Expected: items ordered by date descending regardless of insertion order
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let middle = factory::create_news_at(db, now - Duration::days(2)).await?;
    let newest = factory::create_news_at(db, now).await?;
    let oldest = factory::create_news_at(db, now - Duration::days(30)).await?;

    let news = NewsRepository::new(db).list().await?;
    let ids: Vec<i32> = news.iter().map(|n| n.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests listing with no news.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_list_without_news() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let news = NewsRepository::new(db).list().await?;

    assert!(news.is_empty());

    Ok(())
}
