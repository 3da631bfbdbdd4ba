use super::*;

use sea_orm::TransactionTrait;

use crate::server::model::store::UpdateStoreParams;

/// Tests that renaming a store keeps the name filter in step.
///
/// Expected: found by the new name, not by the old one
#[tokio::test]
async fn rename_refreshes_search_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let repo = StoreRepository::new(db);
    let store = repo.create(store_params(owner.id, "Padaria", vec![])).await?;

    repo.update(
        store.id,
        UpdateStoreParams {
            name: Some("Açaí Êxpress".to_string()),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.find_all(Some("padaria")).await?.is_empty());
    assert_eq!(repo.find_all(Some("AÇAÍ")).await?.len(), 1);

    Ok(())
}

/// Tests an update whose category tags fail to insert inside a transaction.
///
/// Expected: Err, and after rollback the store keeps its name and original tags
#[tokio::test]
async fn failed_tag_write_rolls_back_with_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_store_owner(db).await?;
    let shoes = factory::create_category(db).await?;
    let store = StoreRepository::new(db)
        .create(store_params(owner.id, "Loja Centauro", vec![shoes.id]))
        .await?;

    let txn = db.begin().await?;
    let result = StoreRepository::new(&txn)
        .update(
            store.id,
            UpdateStoreParams {
                name: Some("Renamed".to_string()),
                category_ids: Some(vec![shoes.id, 9999]),
                ..Default::default()
            },
        )
        .await;
    assert!(result.is_err());
    txn.rollback().await?;

    let repo = StoreRepository::new(db);
    let reloaded = repo.find_by_id(store.id).await?.unwrap();
    assert_eq!(reloaded.name, "Loja Centauro");
    let categories = repo.category_ids_for(vec![store.id]).await?;
    assert_eq!(categories.get(&store.id), Some(&vec![shoes.id]));

    Ok(())
}
