use super::*;

/// Tests favoriting the same product twice.
///
/// Expected: the second insert fails with a unique-constraint violation
#[tokio::test]
async fn rejects_duplicate_product_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let product = factory::create_product(db, store.id).await?;
    let shopper = factory::create_shopper(db).await?;

    let repo = FavoriteProductRepository::new(db);
    repo.create(shopper.id, product.id).await?;
    let err = repo.create(shopper.id, product.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}

/// Tests that two shoppers may favorite the same store.
///
/// Expected: Ok for both and both found by their pair
#[tokio::test]
async fn allows_same_store_for_different_shoppers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let first = factory::create_shopper(db).await?;
    let second = factory::create_shopper(db).await?;

    let repo = FavoriteStoreRepository::new(db);
    repo.create(first.id, store.id).await?;
    repo.create(second.id, store.id).await?;

    assert!(repo
        .find_by_shopper_and_store(first.id, store.id)
        .await?
        .is_some());
    assert!(repo
        .find_by_shopper_and_store(second.id, store.id)
        .await?
        .is_some());
    assert_eq!(repo.find_by_store(store.id).await?.len(), 2);

    Ok(())
}

/// Tests favoriting the same store twice.
///
/// Expected: the second insert fails with a unique-constraint violation
#[tokio::test]
async fn rejects_duplicate_store_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let shopper = factory::create_shopper(db).await?;

    let repo = FavoriteStoreRepository::new(db);
    repo.create(shopper.id, store.id).await?;
    let err = repo.create(shopper.id, store.id).await.unwrap_err();

    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    Ok(())
}
