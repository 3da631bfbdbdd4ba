use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::kiosk::{KioskSurveyDto, KioskSurveyInputDto},
    server::{
        controller::require_viewer,
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::kiosk::CreateKioskSurveyParams,
        service::kiosk::KioskService,
        state::AppState,
    },
};

/// Record an anonymous survey answer from a mall kiosk.
///
/// # Access Control
/// Public
///
/// # Returns
/// - `201 Created` - The stored answer
/// - `400 Bad Request` - Invalid fields or unknown category
pub async fn create_survey(
    State(state): State<AppState>,
    Json(payload): Json<KioskSurveyInputDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let survey = KioskService::new(&state.db)
        .create(CreateKioskSurveyParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(survey.into_dto())))
}

pub async fn get_surveys(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::KioskSurvey, Action::View)],
    )
    .await?;

    let surveys = KioskService::new(&state.db).get_all().await?;

    let dtos: Vec<KioskSurveyDto> = surveys.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_survey_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(survey_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::KioskSurvey, Action::View)],
    )
    .await?;

    match KioskService::new(&state.db).get_by_id(survey_id).await? {
        Some(survey) => Ok((StatusCode::OK, Json(survey.into_dto()))),
        None => Err(AppError::NotFound("Survey not found".to_string())),
    }
}

pub async fn delete_survey(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(survey_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::KioskSurvey, Action::Delete)],
    )
    .await?;

    if !KioskService::new(&state.db).delete(survey_id).await? {
        return Err(AppError::NotFound("Survey not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
