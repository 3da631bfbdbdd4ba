use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{product::ProductDto, store::StoreDto},
    server::{
        controller::require_viewer,
        error::{auth::AuthError, AppError},
        middleware::auth::Permission,
        model::account::Viewer,
        service::recommendation::RecommendationService,
        state::AppState,
    },
};

fn shopper_of(viewer: &Viewer) -> Result<i32, AppError> {
    viewer.shopper_id.ok_or_else(|| {
        AuthError::AccessDenied(
            viewer.account_id,
            "recommendations are only available to shoppers".to_string(),
        )
        .into()
    })
}

/// Stores sharing a category with the current shopper's desired categories.
///
/// # Access Control
/// - `Authenticated` with a shopper profile; other accounts get 403
pub async fn get_recommended_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[Permission::Authenticated]).await?;
    let shopper_id = shopper_of(&viewer)?;

    let stores = RecommendationService::new(&state.db)
        .stores_for(shopper_id)
        .await?;

    let dtos: Vec<StoreDto> = stores
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Products sharing a category with the current shopper's desired categories.
pub async fn get_recommended_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[Permission::Authenticated]).await?;
    let shopper_id = shopper_of(&viewer)?;

    let products = RecommendationService::new(&state.db)
        .products_for(shopper_id)
        .await?;

    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| p.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
