use super::*;

/// Tests deleting a news item.
///
/// Expected: Ok with the item gone
#[tokio::test]
async fn deletes_news_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(News).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let news = factory::create_news(db).await?;

    NewsRepository::new(db).delete(news.id).await?;

    assert!(News::find_by_id(news.id).one(db).await?.is_none());

    Ok(())
}
