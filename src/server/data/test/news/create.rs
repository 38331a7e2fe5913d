use super::*;

/// Tests creating a news item.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_news_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now();
    let news = NewsRepository::new(db)
        .create(CreateNewsParams {
            title: "Hall opening".to_string(),
            content: "Doors open at **noon**.".to_string(),
            banner_url: None,
            date,
        })
        .await?;

    let stored = News::find_by_id(news.id).one(db).await?.unwrap();
    assert_eq!(stored.title, "Hall opening");
    assert_eq!(stored.content, "Doors open at **noon**.");
    assert!(stored.banner_url.is_none());

    Ok(())
}
