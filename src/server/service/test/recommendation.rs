use super::*;

use crate::server::service::recommendation::RecommendationService;

/// Tests store and product recommendations for a shopper with desired categories.
///
/// Expected: only entries sharing a desired category, each listed once
#[tokio::test]
async fn recommends_overlapping_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shoes = factory::create_category(db).await?;
    let books = factory::create_category(db).await?;
    let food = factory::create_category(db).await?;

    let shopper = factory::create_shopper(db).await?;
    factory::helpers::desire_category(db, shopper.id, shoes.id).await?;
    factory::helpers::desire_category(db, shopper.id, books.id).await?;

    let owner = factory::create_store_owner(db).await?;
    let both = factory::create_store(db, owner.id).await?;
    let unrelated = factory::create_store(db, owner.id).await?;
    factory::helpers::tag_store(db, both.id, shoes.id).await?;
    factory::helpers::tag_store(db, both.id, books.id).await?;
    factory::helpers::tag_store(db, unrelated.id, food.id).await?;

    let sneaker = factory::create_product(db, both.id).await?;
    let sandwich = factory::create_product(db, unrelated.id).await?;
    factory::helpers::tag_product(db, sneaker.id, shoes.id).await?;
    factory::helpers::tag_product(db, sandwich.id, food.id).await?;

    let service = RecommendationService::new(db);
    let stores = service.stores_for(shopper.id).await?;
    let products = service.products_for(shopper.id).await?;

    assert_eq!(stores.iter().map(|s| s.id).collect::<Vec<_>>(), vec![both.id]);
    assert_eq!(
        products.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![sneaker.id]
    );

    Ok(())
}

/// Tests recommendations for a shopper without desired categories.
///
/// Expected: empty lists
#[tokio::test]
async fn empty_without_desired_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let shopper = factory::create_shopper(db).await?;
    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    factory::helpers::tag_store(db, store.id, category.id).await?;

    let service = RecommendationService::new(db);

    assert!(service.stores_for(shopper.id).await?.is_empty());
    assert!(service.products_for(shopper.id).await?.is_empty());

    Ok(())
}
