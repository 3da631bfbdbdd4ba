use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::server::{
    controller::{require_viewer, NameFilter},
    error::AppError,
    middleware::auth::Permission,
    service::search::SearchService,
    state::AppState,
};

/// Stores and products whose name contains `?nome=`, case-insensitively.
///
/// A missing or blank term returns everything.
///
/// # Access Control
/// - `Authenticated`
pub async fn search(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[Permission::Authenticated]).await?;

    let results = SearchService::new(&state.db).search(filter.term()).await?;

    Ok((
        StatusCode::OK,
        Json(results.into_dto(&viewer, &state.media_url)),
    ))
}
