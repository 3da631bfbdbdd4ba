use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Authenticated])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a header using a scheme other than Bearer.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_non_bearer_scheme() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a refresh token presented as an access token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_refresh_token_as_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account = factory::create_account(db).await?;
    let pair = tokens.issue_pair(account.id)?;
    let headers = bearer(&pair.refresh);

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid access token with a granted permission.
///
/// Expected: Ok with the token's account
#[tokio::test]
async fn grants_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account =
        factory::account::create_account_with_role(db, AccountRole::StoreOwner).await?;
    let pair = tokens.issue_pair(account.id)?;
    let headers = bearer(&pair.access);

    let returned = AuthGuard::new(db, &tokens, &headers)
        .require(&[
            Permission::Authenticated,
            Permission::Model(Resource::Store, Action::Create),
        ])
        .await?;

    assert_eq!(returned.id, account.id);

    Ok(())
}

/// Tests a shopper asking to create a store.
///
/// Expected: Err(AuthError::AccessDenied) carrying the account id
#[tokio::test]
async fn denies_missing_permission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account = factory::account::create_account_with_role(db, AccountRole::Shopper).await?;
    let pair = tokens.issue_pair(account.id)?;
    let headers = bearer(&pair.access);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[
            Permission::Model(Resource::Store, Action::View),
            Permission::Model(Resource::Store, Action::Create),
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(account_id, _))) => {
            assert_eq!(account_id, account.id);
        }
        Err(e) => panic!("Expected AccessDenied error, got: {:?}", e),
        Ok(_) => panic!("Expected AccessDenied error, got Ok"),
    }

    Ok(())
}

/// Tests an access token that was revoked by logout.
///
/// Expected: Err(AuthError::RevokedToken)
#[tokio::test]
async fn rejects_revoked_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let account = factory::create_account(db).await?;
    let pair = tokens.issue_pair(account.id)?;
    let headers = bearer(&pair.access);

    let guard = AuthGuard::new(db, &tokens, &headers);
    let (_, claims) = guard.authenticate().await?;
    AuthService::new(db, &tokens)
        .logout(&claims, &pair.refresh)
        .await?;

    let result = guard.require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::RevokedToken(_)))
    ));

    Ok(())
}
