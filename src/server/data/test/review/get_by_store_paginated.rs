use super::*;

/// Tests paging through a store's reviews.
///
/// Expected: total counts every review of the store, pages hold at most `per_page`
#[tokio::test]
async fn pages_reviews_of_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, store) = factory::helpers::create_store_with_owner(db).await?;
    let other_store = factory::create_store(db, owner.id).await?;
    let shopper = factory::create_shopper(db).await?;
    for rating in [1.0, 2.0, 3.0] {
        factory::create_review(db, shopper.id, store.id, rating).await?;
    }
    factory::create_review(db, shopper.id, other_store.id, 5.0).await?;

    let repo = ReviewRepository::new(db);
    let (first, total) = repo.get_by_store_paginated(store.id, 0, 2).await?;
    let (second, _) = repo.get_by_store_paginated(store.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);
    assert!(first
        .iter()
        .chain(second.iter())
        .all(|r| r.store_id == store.id));

    Ok(())
}
