use super::*;

use chrono::Duration;

use crate::server::service::{
    account::AccountService,
    auth::AuthService,
    token::{TokenService, TokenType},
};

fn token_service() -> TokenService {
    TokenService::new(
        "test-secret-that-is-at-least-32-bytes-long",
        Duration::minutes(5),
        Duration::days(1),
    )
}

/// Tests logging in with the registered password.
///
/// Expected: Ok with a pair whose access token authenticates the account
#[tokio::test]
async fn login_issues_usable_pair() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let owner = AccountService::new(db)
        .register_store_owner(store_owner_registration("loja@example.com"))
        .await?;

    let auth = AuthService::new(db, &tokens);
    let pair = auth.login("  LOJA@example.com ", "correct horse battery").await?;
    let (account, claims) = auth.authenticate(&pair.access).await?;

    assert_eq!(account.id, owner.account_id);
    assert_eq!(claims.token_type, TokenType::Access);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_directory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    AccountService::new(db)
        .register_store_owner(store_owner_registration("loja@example.com"))
        .await?;

    let result = AuthService::new(db, &tokens)
        .login("loja@example.com", "wrong password")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests that a refresh token can only be used once.
///
/// Expected: first refresh Ok, replay Err(AuthError::RevokedToken)
#[tokio::test]
async fn refresh_rotates_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account = factory::create_account(db).await?;
    let pair = tokens.issue_pair(account.id)?;

    let auth = AuthService::new(db, &tokens);
    let rotated = auth.refresh(&pair.refresh).await?;
    let replay = auth.refresh(&pair.refresh).await;

    assert_ne!(rotated.refresh, pair.refresh);
    assert!(matches!(
        replay,
        Err(AppError::AuthErr(AuthError::RevokedToken(_)))
    ));

    Ok(())
}

/// Tests that logout revokes both the access and the refresh token.
///
/// Expected: both tokens rejected afterwards
#[tokio::test]
async fn logout_revokes_both_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account = factory::create_account(db).await?;
    let pair = tokens.issue_pair(account.id)?;

    let auth = AuthService::new(db, &tokens);
    let (_, claims) = auth.authenticate(&pair.access).await?;
    auth.logout(&claims, &pair.refresh).await?;

    assert!(auth.authenticate(&pair.access).await.is_err());
    assert!(auth.refresh(&pair.refresh).await.is_err());

    Ok(())
}

/// Tests logging out with another account's refresh token.
///
/// Expected: Err(AppError::BadRequest) and the foreign token still usable
#[tokio::test]
async fn logout_rejects_foreign_refresh_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let mine = factory::create_account(db).await?;
    let theirs = factory::create_account(db).await?;
    let my_pair = tokens.issue_pair(mine.id)?;
    let their_pair = tokens.issue_pair(theirs.id)?;

    let auth = AuthService::new(db, &tokens);
    let (_, claims) = auth.authenticate(&my_pair.access).await?;
    let result = auth.logout(&claims, &their_pair.refresh).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(auth.refresh(&their_pair.refresh).await.is_ok());

    Ok(())
}

/// Tests that an inactive account cannot authenticate.
///
/// Expected: Err(AuthError::AccountNotFound)
#[tokio::test]
async fn rejects_deleted_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account = factory::create_account(db).await?;
    let pair = tokens.issue_pair(account.id)?;
    entity::prelude::Account::delete_by_id(account.id)
        .exec(db)
        .await?;

    let result = AuthService::new(db, &tokens).authenticate(&pair.access).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountNotFound(_)))
    ));

    Ok(())
}
