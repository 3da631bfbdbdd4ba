use super::*;

/// Tests that deleting a store removes its products and reviews.
///
/// Expected: Ok(true) and no product or review rows left
#[tokio::test]
async fn cascades_to_products_and_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let shopper = factory::create_shopper(db).await?;
    factory::create_product(db, store.id).await?;
    factory::create_review(db, shopper.id, store.id, 4.0).await?;
    factory::create_favorite_store(db, shopper.id, store.id).await?;

    let deleted = StoreRepository::new(db).delete(store.id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Product::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Review::find().count(db).await?, 0);
    assert_eq!(entity::prelude::FavoriteStore::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Shopper::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a store that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!StoreRepository::new(db).delete(42).await?);

    Ok(())
}
