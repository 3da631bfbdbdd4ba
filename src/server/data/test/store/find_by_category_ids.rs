use super::*;

/// Tests that a store carrying several of the categories appears once.
///
/// Expected: each matching store exactly once, untagged stores excluded
#[tokio::test]
async fn deduplicates_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let shoes = factory::create_category(db).await?;
    let sports = factory::create_category(db).await?;
    let books = factory::create_category(db).await?;

    let repo = StoreRepository::new(db);
    let both = repo
        .create(store_params(owner.id, "Both", vec![shoes.id, sports.id]))
        .await?;
    let one = repo
        .create(store_params(owner.id, "One", vec![sports.id]))
        .await?;
    repo.create(store_params(owner.id, "Other", vec![books.id]))
        .await?;

    let stores = repo.find_by_category_ids(vec![shoes.id, sports.id]).await?;

    let ids: Vec<i32> = stores.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![both.id, one.id]);

    Ok(())
}

/// Tests that an empty category list matches nothing.
///
/// Expected: empty vector
#[tokio::test]
async fn empty_categories_match_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _store) = factory::helpers::create_store_with_owner(db).await?;

    let stores = StoreRepository::new(db).find_by_category_ids(vec![]).await?;

    assert!(stores.is_empty());

    Ok(())
}
