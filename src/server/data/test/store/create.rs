use super::*;

/// Tests creating a store tagged with categories.
///
/// Expected: Ok with the store row and its category links, ascending
#[tokio::test]
async fn creates_store_with_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let shoes = factory::create_category(db).await?;
    let sports = factory::create_category(db).await?;

    let repo = StoreRepository::new(db);
    let store = repo
        .create(store_params(owner.id, "Loja Centauro", vec![sports.id, shoes.id]))
        .await?;

    assert_eq!(store.name, "Loja Centauro");
    assert_eq!(store.owner_id, owner.id);
    assert!(store.active);

    let categories = repo.category_ids_for(vec![store.id]).await?;
    assert_eq!(categories.get(&store.id), Some(&vec![shoes.id, sports.id]));

    Ok(())
}

/// Tests that a store must reference an existing owner.
///
/// Expected: Err from the foreign key
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StoreRepository::new(db)
        .create(store_params(999, "Orfa", vec![]))
        .await;

    assert!(result.is_err());

    Ok(())
}
