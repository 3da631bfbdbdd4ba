use super::*;

/// Tests creating an account with a role.
///
/// Expected: Ok with an active account carrying the given email and role
#[tokio::test]
async fn creates_active_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    let account = repo
        .create(
            "lojista@example.com".to_string(),
            "hash".to_string(),
            AccountRole::StoreOwner,
        )
        .await?;

    assert_eq!(account.email, "lojista@example.com");
    assert_eq!(account.role, AccountRole::StoreOwner);
    assert!(account.active);

    let found = repo.find_by_email("lojista@example.com").await?;
    assert_eq!(found.map(|a| a.id), Some(account.id));

    Ok(())
}

/// Tests that a second account with the same email is rejected by the unique index.
///
/// Expected: Err and only one account row
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.create("dup@example.com".to_string(), "hash".to_string(), AccountRole::Shopper)
        .await?;

    let result = repo
        .create("dup@example.com".to_string(), "hash".to_string(), AccountRole::Shopper)
        .await;

    assert!(result.is_err());
    assert!(repo.email_exists("dup@example.com").await?);
    assert_eq!(entity::prelude::Account::find().count(db).await?, 1);

    Ok(())
}
