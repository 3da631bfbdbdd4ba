use super::*;

/// Tests that inactive reviews are left out of the ratings.
///
/// Expected: only active ratings grouped under their store
#[tokio::test]
async fn excludes_inactive_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let shopper = factory::create_shopper(db).await?;
    factory::create_review(db, shopper.id, store.id, 4.0).await?;
    factory::create_review(db, shopper.id, store.id, 2.0).await?;
    factory::review::ReviewFactory::new(db, shopper.id, store.id)
        .rating(0.0)
        .active(false)
        .build()
        .await?;

    let ratings = ReviewRepository::new(db)
        .active_ratings_for(vec![store.id])
        .await?;

    let mut store_ratings = ratings.get(&store.id).cloned().unwrap_or_default();
    store_ratings.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(store_ratings, vec![2.0, 4.0]);

    Ok(())
}

/// Tests that a store without reviews is absent from the map.
///
/// Expected: empty map
#[tokio::test]
async fn store_without_reviews_is_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;

    let ratings = ReviewRepository::new(db)
        .active_ratings_for(vec![store.id])
        .await?;

    assert!(ratings.is_empty());

    Ok(())
}
