use super::*;

use crate::server::{model::store::CreateStoreParams, service::store::StoreService};

fn params(owner_id: i32, sector_id: Option<i32>) -> CreateStoreParams {
    CreateStoreParams {
        owner_id,
        sector_id,
        name: "Casa do Cafe".to_string(),
        description: "Cafes especiais".to_string(),
        banner: None,
        logo: None,
        photo: None,
        location: "Piso 1, loja 12".to_string(),
        opening_hours: "10h-22h".to_string(),
        social_links: None,
        category_ids: vec![],
    }
}

/// Tests the average rating of a store.
///
/// Expected: mean of active ratings only
#[tokio::test]
async fn averages_active_ratings_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let first = factory::create_shopper(db).await?;
    let second = factory::create_shopper(db).await?;
    let third = factory::create_shopper(db).await?;
    factory::create_review(db, first.id, store.id, 4.0).await?;
    factory::create_review(db, second.id, store.id, 5.0).await?;
    factory::review::ReviewFactory::new(db, third.id, store.id)
        .rating(1.0)
        .active(false)
        .build()
        .await?;

    let store = StoreService::new(db).get_by_id(store.id).await?.unwrap();

    assert_eq!(store.average_rating, 4.5);
    assert_eq!(store.review_ids.len(), 3);

    Ok(())
}

/// Tests the average rating of a store without reviews.
///
/// Expected: 0.0
#[tokio::test]
async fn average_is_zero_without_reviews() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;

    let store = StoreService::new(db).get_by_id(store.id).await?.unwrap();

    assert_eq!(store.average_rating, 0.0);

    Ok(())
}

/// Tests creating a store in a sector that does not exist.
///
/// Expected: Err(AppError::Validation) on `setor` and no store written
#[tokio::test]
async fn rejects_unknown_sector() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;

    let result = StoreService::new(db).create(params(owner.id, Some(404))).await;

    let Err(AppError::Validation(errors)) = result else {
        panic!("expected a validation error");
    };
    assert!(errors.field_errors().contains_key("setor"));
    assert_eq!(entity::prelude::Store::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a store in an existing sector.
///
/// Expected: Ok with the sector set
#[tokio::test]
async fn creates_store_in_sector() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let sector = factory::create_sector(db).await?;

    let store = StoreService::new(db)
        .create(params(owner.id, Some(sector.id)))
        .await?;

    assert_eq!(store.sector_id, Some(sector.id));
    assert_eq!(store.owner_id, owner.id);
    assert!(store.active);

    Ok(())
}

/// Tests that review pages are numbered from one.
///
/// Expected: page 1 and page 0 hold the two newest reviews, page 2 the oldest
#[tokio::test]
async fn review_pages_start_at_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let mut review_ids = Vec::new();
    for rating in [3.0, 4.0, 5.0] {
        let shopper = factory::create_shopper(db).await?;
        review_ids.push(factory::create_review(db, shopper.id, store.id, rating).await?.id);
    }

    let service = StoreService::new(db);
    let first = service.reviews(store.id, 1, 2).await?;
    let zero = service.reviews(store.id, 0, 2).await?;
    let second = service.reviews(store.id, 2, 2).await?;

    assert_eq!(first.page, 1);
    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages, 2);
    assert_eq!(
        first.reviews.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![review_ids[2], review_ids[1]]
    );
    assert_eq!(zero.page, 1);
    assert_eq!(zero.reviews.len(), 2);
    assert_eq!(
        second.reviews.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![review_ids[0]]
    );

    Ok(())
}

/// Tests a page number whose offset overflows.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_page_beyond_offset_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let service = StoreService::new(db);

    let overflowing = service.reviews(store.id, u64::MAX / 2, 100).await;
    let past_i64 = service.reviews(store.id, i64::MAX as u64, 2).await;

    assert!(matches!(overflowing, Err(AppError::BadRequest(_))));
    assert!(matches!(past_i64, Err(AppError::BadRequest(_))));

    Ok(())
}
