use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use validator::Validate;

use crate::{
    model::account::{RefreshRequestDto, TokenRequestDto},
    server::{error::AppError, service::auth::AuthService, state::AppState},
};

/// Exchange email and password for a token pair.
///
/// # Access Control
/// Public
///
/// # Returns
/// - `200 OK` - `{access, refresh}` token pair
/// - `400 Bad Request` - Malformed email or blank password
/// - `401 Unauthorized` - Unknown email, wrong password, or inactive account
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let pair = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.senha)
        .await?;

    Ok((StatusCode::OK, Json(pair.into_dto())))
}

/// Rotate a refresh token into a new token pair.
///
/// The presented refresh token is revoked and cannot be used again.
///
/// # Returns
/// - `200 OK` - New `{access, refresh}` token pair
/// - `401 Unauthorized` - Refresh token invalid, expired, or already used
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let pair = AuthService::new(&state.db, &state.tokens)
        .refresh(&payload.refresh)
        .await?;

    Ok((StatusCode::OK, Json(pair.into_dto())))
}
