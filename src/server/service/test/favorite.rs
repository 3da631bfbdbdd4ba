use super::*;

use crate::server::service::{favorite::FavoriteService, shopper::ShopperService};

/// Tests adding then removing a favorite product.
///
/// Expected: the shopper's favorites return to what they were
#[tokio::test]
async fn add_then_remove_restores_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;
    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let product = factory::create_product(db, store.id).await?;

    let service = FavoriteService::new(db);
    let favorite = service.add_product(shopper.id, product.id).await?;
    assert_eq!(favorite.product_id, product.id);

    let shoppers = ShopperService::new(db);
    assert_eq!(shoppers.favorite_products(shopper.id).await?.len(), 1);

    assert!(service.remove_product(shopper.id, product.id).await?);
    assert!(shoppers.favorite_products(shopper.id).await?.is_empty());
    assert!(!service.remove_product(shopper.id, product.id).await?);

    Ok(())
}

/// Tests favoriting the same store twice.
///
/// Expected: Err(AppError::Validation) on `loja`
#[tokio::test]
async fn rejects_duplicate_store_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;
    let (_, store) = factory::helpers::create_store_with_owner(db).await?;

    let service = FavoriteService::new(db);
    service.add_store(shopper.id, store.id).await?;
    let result = service.add_store(shopper.id, store.id).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected a validation error");
    };
    assert!(errors.field_errors().contains_key("loja"));
    assert_eq!(service.get_stores(Some(shopper.id)).await?.len(), 1);

    Ok(())
}

/// Tests favoriting a product that does not exist.
///
/// Expected: Err(AppError::Validation) on `produto`
#[tokio::test]
async fn rejects_unknown_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;

    let result = FavoriteService::new(db).add_product(shopper.id, 9).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected a validation error");
    };
    assert!(errors.field_errors().contains_key("produto"));

    Ok(())
}
