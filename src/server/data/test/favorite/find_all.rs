use super::*;

/// Tests listing favorites with and without a shopper filter.
///
/// Expected: the filter keeps only that shopper's rows
#[tokio::test]
async fn filters_by_shopper() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let product = factory::create_product(db, store.id).await?;
    let first = factory::create_shopper(db).await?;
    let second = factory::create_shopper(db).await?;
    factory::create_favorite_product(db, first.id, product.id).await?;
    factory::create_favorite_product(db, second.id, product.id).await?;

    let repo = FavoriteProductRepository::new(db);

    assert_eq!(repo.find_all(None).await?.len(), 2);
    let own = repo.find_all(Some(first.id)).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].shopper_id, first.id);
    assert_eq!(repo.product_ids_for_shopper(first.id).await?, vec![product.id]);

    Ok(())
}
