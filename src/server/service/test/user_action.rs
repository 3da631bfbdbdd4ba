use super::*;

use crate::server::{
    model::user_action::RecordUserActionParams, service::user_action::UserActionService,
};

/// Tests recording a store view.
///
/// Expected: one entry with the store and a readable detail
#[tokio::test]
async fn records_store_view() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;
    let (_, store) = factory::helpers::create_store_with_owner(db).await?;

    let service = UserActionService::new(db);
    service
        .record_store_view(shopper.account_id, store.id, &store.name)
        .await;

    let actions = service.get_all(Some(shopper.account_id)).await?;
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].store_id, Some(store.id));
    assert_eq!(actions[0].detail, format!("Visualizou a loja {}", store.name));

    Ok(())
}

/// Tests recording an action for an account that does not exist.
///
/// Expected: returns normally and nothing is stored
#[tokio::test]
async fn swallows_write_failure() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserActionService::new(db);
    service
        .record(RecordUserActionParams {
            account_id: 999,
            action: "custom".to_string(),
            store_id: None,
            product_id: None,
            detail: "orphan".to_string(),
        })
        .await;

    assert!(service.get_all(None).await?.is_empty());

    Ok(())
}
