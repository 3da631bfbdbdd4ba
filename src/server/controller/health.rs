use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::HealthDto,
    server::{error::AppError, state::AppState},
};

/// Liveness probe. Fails with 500 when the database does not answer.
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.db.ping().await?;

    Ok((
        StatusCode::OK,
        Json(HealthDto {
            status: "ok".to_string(),
        }),
    ))
}
