use super::*;

/// Tests that deleting an account removes its shopper profile.
///
/// Expected: Ok(true) and no shopper rows left
#[tokio::test]
async fn cascades_to_shopper_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let shopper = factory::create_shopper(db).await?;

    let deleted = AccountRepository::new(db).delete(shopper.account_id).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Shopper::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AccountRepository::new(db).delete(999).await?;

    assert!(!deleted);

    Ok(())
}
