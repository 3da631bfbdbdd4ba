use super::*;

/// Tests filtering the audit log by account and by store.
///
/// Expected: each filter keeps only the matching entries, in insertion order
#[tokio::test]
async fn filters_by_account_and_store() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, store) = factory::helpers::create_store_with_owner(db).await?;
    let product = factory::create_product(db, store.id).await?;
    let first = factory::create_account(db).await?;
    let second = factory::create_account(db).await?;

    let repo = UserActionRepository::new(db);
    repo.create(RecordUserActionParams {
        account_id: first.id,
        action: VIEWED_STORE.to_string(),
        store_id: Some(store.id),
        product_id: None,
        detail: "Visualizou a loja".to_string(),
    })
    .await?;
    repo.create(RecordUserActionParams {
        account_id: second.id,
        action: VIEWED_PRODUCT.to_string(),
        store_id: None,
        product_id: Some(product.id),
        detail: "Visualizou o produto".to_string(),
    })
    .await?;

    assert_eq!(repo.find_all(None).await?.len(), 2);

    let own = repo.find_all(Some(first.id)).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].action, VIEWED_STORE);

    let touching_store = repo.find_by_store(store.id).await?;
    assert_eq!(touching_store.len(), 1);
    assert_eq!(touching_store[0].account_id, first.id);

    Ok(())
}
