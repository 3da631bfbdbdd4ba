use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::user_action::UserActionDto,
    server::{
        controller::require_viewer,
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        service::user_action::UserActionService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct UserActionFilter {
    pub conta: Option<i32>,
}

/// Audit log, optionally of one account (`?conta=`).
///
/// # Access Control
/// - `UserAction` / `View` - Admins only
pub async fn get_user_actions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<UserActionFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::UserAction, Action::View)],
    )
    .await?;

    let actions = UserActionService::new(&state.db)
        .get_all(filter.conta)
        .await?;

    let dtos: Vec<UserActionDto> = actions.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
