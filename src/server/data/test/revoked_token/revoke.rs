use super::*;

/// Tests that a revoked token id is reported as revoked.
///
/// Expected: is_revoked true for the revoked jti, false for any other
#[tokio::test]
async fn marks_token_revoked() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = RevokedTokenRepository::new(db);

    repo.revoke("jti-1", account.id, Utc::now() + Duration::days(1))
        .await?;

    assert!(repo.is_revoked("jti-1").await?);
    assert!(!repo.is_revoked("jti-2").await?);

    Ok(())
}

/// Tests that revoking the same token twice is not an error.
///
/// Expected: Ok on both calls
#[tokio::test]
async fn revoking_twice_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = RevokedTokenRepository::new(db);
    let expires_at = Utc::now() + Duration::days(1);

    repo.revoke("jti-1", account.id, expires_at).await?;
    repo.revoke("jti-1", account.id, expires_at).await?;

    assert!(repo.is_revoked("jti-1").await?);

    Ok(())
}
