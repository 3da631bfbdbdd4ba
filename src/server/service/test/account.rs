use super::*;

use crate::server::service::account::AccountService;

/// Tests registering a shopper with desired categories.
///
/// Expected: Ok with the shopper, its email and categories resolved
#[tokio::test]
async fn registers_shopper_with_desired_categories() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let shopper = AccountService::new(db)
        .register_shopper(shopper_registration("maria@example.com", vec![category.id]))
        .await?;

    assert_eq!(shopper.email, "maria@example.com");
    assert_eq!(shopper.desired_category_ids, vec![category.id]);
    assert!(shopper.favorite_products.is_empty());

    let account = entity::prelude::Account::find_by_id(shopper.account_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(account.role, AccountRole::Shopper);
    assert_ne!(account.password_hash, "correct horse battery");

    Ok(())
}

/// Tests registering with an email that is already in use.
///
/// Expected: Err(AppError::Validation) on `email` and no new rows
#[tokio::test]
async fn rejects_duplicate_email_without_orphans() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AccountService::new(db);
    service
        .register_shopper(shopper_registration("dup@example.com", vec![]))
        .await?;

    let result = service
        .register_store_owner(store_owner_registration("dup@example.com"))
        .await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected a validation error");
    };
    assert!(errors.field_errors().contains_key("email"));
    assert_eq!(account_count(db).await, 1);
    assert_eq!(entity::prelude::StoreOwner::find().count(db).await?, 0);

    Ok(())
}

/// Tests registering with a desired category that does not exist.
///
/// Expected: Err(AppError::Validation) and no account created
#[tokio::test]
async fn rejects_unknown_desired_category() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccountService::new(db)
        .register_shopper(shopper_registration("ghost@example.com", vec![77]))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(account_count(db).await, 0);

    Ok(())
}

/// Tests the viewer of a shopper carries their favorites.
///
/// Expected: shopper id and favorite sets filled in
#[tokio::test]
async fn viewer_loads_shopper_favorites() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;
    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let product = factory::create_product(db, store.id).await?;
    factory::create_favorite_store(db, shopper.id, store.id).await?;
    factory::create_favorite_product(db, shopper.id, product.id).await?;

    let account = entity::prelude::Account::find_by_id(shopper.account_id)
        .one(db)
        .await?
        .unwrap();
    let viewer = AccountService::new(db).viewer(&account).await?;

    assert_eq!(viewer.shopper_id, Some(shopper.id));
    assert!(viewer.has_favorite_store(store.id));
    assert!(viewer.has_favorite_product(product.id));
    assert!(!viewer.is_admin());

    Ok(())
}
