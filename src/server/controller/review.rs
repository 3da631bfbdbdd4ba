use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::review::{ReviewDto, ReviewInputDto, ReviewPatchDto},
    server::{
        controller::{acting_shopper, require_viewer},
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::Review, Action::View);

#[derive(Deserialize)]
pub struct ReviewFilter {
    pub loja: Option<i32>,
}

/// List reviews, optionally of one store (`?loja=`).
pub async fn get_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ReviewFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let reviews = ReviewService::new(&state.db).get_all(filter.loja).await?;

    let dtos: Vec<ReviewDto> = reviews.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_review_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    match ReviewService::new(&state.db).get_by_id(review_id).await? {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

/// Review a store.
///
/// Shoppers always review as themselves; admins name the shopper in `cliente`.
///
/// # Access Control
/// - `Review` / `Create` - Shoppers and admins
///
/// # Returns
/// - `201 Created` - The new review
/// - `400 Bad Request` - Rating outside 0..=5 or unknown store
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ReviewInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Review, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let shopper_id = acting_shopper(&viewer, payload.cliente)?;
    let review = ReviewService::new(&state.db)
        .create(CreateReviewParams::from_dto(shopper_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

pub async fn update_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
    Json(payload): Json<ReviewInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Review, Action::Update)],
    )
    .await?;
    payload.validate()?;

    match ReviewService::new(&state.db)
        .update(review_id, UpdateReviewParams::from_put(payload))
        .await?
    {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

pub async fn patch_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
    Json(payload): Json<ReviewPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Review, Action::Update)],
    )
    .await?;
    payload.validate()?;

    match ReviewService::new(&state.db)
        .update(review_id, UpdateReviewParams::from_patch(payload))
        .await?
    {
        Some(review) => Ok((StatusCode::OK, Json(review.into_dto()))),
        None => Err(AppError::NotFound("Review not found".to_string())),
    }
}

pub async fn delete_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(review_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Review, Action::Delete)],
    )
    .await?;

    if !ReviewService::new(&state.db).delete(review_id).await? {
        return Err(AppError::NotFound("Review not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
