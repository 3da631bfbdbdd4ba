use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::sea_orm_active_enums::AccountRole;
use validator::Validate;

use crate::{
    model::account::{RefreshRequestDto, RegisterShopperDto, RegisterStoreOwnerDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::account::{RegisterShopperParams, RegisterStoreOwnerParams, Viewer},
        service::{account::AccountService, auth::AuthService},
        state::AppState,
    },
};

/// Register a shopper account and profile.
///
/// The account and the shopper profile are written in one transaction; if either
/// insert fails nothing is stored.
///
/// # Access Control
/// Public
///
/// # Returns
/// - `201 Created` - The new shopper
/// - `400 Bad Request` - Invalid fields, email already registered, or unknown desired
///   category
pub async fn register_shopper(
    State(state): State<AppState>,
    Json(payload): Json<RegisterShopperDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let shopper = AccountService::new(&state.db)
        .register_shopper(RegisterShopperParams::from_dto(payload))
        .await?;

    let viewer = Viewer::bare(shopper.account_id, AccountRole::Shopper);

    Ok((
        StatusCode::CREATED,
        Json(shopper.into_dto(&viewer, &state.media_url)),
    ))
}

/// Register a store owner account and profile.
///
/// Also mounted at `POST /lojistas`.
///
/// # Access Control
/// Public
///
/// # Returns
/// - `201 Created` - The new store owner
/// - `400 Bad Request` - Invalid fields or email already registered
pub async fn register_store_owner(
    State(state): State<AppState>,
    Json(payload): Json<RegisterStoreOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let owner = AccountService::new(&state.db)
        .register_store_owner(RegisterStoreOwnerParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(owner.into_dto(&state.media_url))))
}

/// Current account with its shopper or store-owner profile.
///
/// # Access Control
/// - `Authenticated`
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let account = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Authenticated])
        .await?;

    let service = AccountService::new(&state.db);
    let viewer = service.viewer(&account).await?;
    let profile = service.profile(account).await?;

    Ok((
        StatusCode::OK,
        Json(profile.into_dto(&viewer, &state.media_url)),
    ))
}

/// Revoke the current access token and the given refresh token.
///
/// # Access Control
/// - `Authenticated`
///
/// # Returns
/// - `204 No Content` - Both tokens revoked
/// - `400 Bad Request` - Refresh token invalid or belonging to another account
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RefreshRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (_, claims) = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    AuthService::new(&state.db, &state.tokens)
        .logout(&claims, &payload.refresh)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
