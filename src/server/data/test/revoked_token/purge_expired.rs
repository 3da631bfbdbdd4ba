use super::*;

/// Tests that only entries past their expiry are purged.
///
/// Expected: 1 row removed, the unexpired token still revoked
#[tokio::test]
async fn removes_only_expired_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let repo = RevokedTokenRepository::new(db);
    let now = Utc::now();

    repo.revoke("old", account.id, now - Duration::hours(1)).await?;
    repo.revoke("fresh", account.id, now + Duration::hours(1))
        .await?;

    let purged = repo.purge_expired(now).await?;

    assert_eq!(purged, 1);
    assert!(!repo.is_revoked("old").await?);
    assert!(repo.is_revoked("fresh").await?);

    Ok(())
}
