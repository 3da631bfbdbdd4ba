use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        category::{CategoryDto, CategoryInputDto, CategoryPatchDto},
        product::ProductDto,
        sector::SectorDto,
        store::StoreDto,
    },
    server::{
        controller::{require_viewer, NameFilter},
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::category::{CreateCategoryParams, UpdateCategoryParams},
        service::category::CategoryService,
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::Category, Action::View);

/// Create a category.
///
/// # Access Control
/// - `Category` / `Create` - Admins only
///
/// # Returns
/// - `201 Created` - The new category
/// - `400 Bad Request` - Blank or too long name
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CategoryInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Category, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let category = CategoryService::new(&state.db)
        .create(CreateCategoryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

pub async fn get_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let categories = CategoryService::new(&state.db)
        .get_all(filter.term())
        .await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_category_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    match CategoryService::new(&state.db).get_by_id(category_id).await? {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
    Json(payload): Json<CategoryInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Category, Action::Update)],
    )
    .await?;
    payload.validate()?;

    match CategoryService::new(&state.db)
        .update(category_id, UpdateCategoryParams::from_put(payload))
        .await?
    {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

pub async fn patch_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
    Json(payload): Json<CategoryPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Category, Action::Update)],
    )
    .await?;
    payload.validate()?;

    match CategoryService::new(&state.db)
        .update(category_id, UpdateCategoryParams::from_patch(payload))
        .await?
    {
        Some(category) => Ok((StatusCode::OK, Json(category.into_dto()))),
        None => Err(AppError::NotFound("Category not found".to_string())),
    }
}

/// Delete a category.
///
/// Store, product and desired-category links are removed with it; kiosk surveys
/// that referenced it keep their row with the category cleared.
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Category, Action::Delete)],
    )
    .await?;

    if !CategoryService::new(&state.db).delete(category_id).await? {
        return Err(AppError::NotFound("Category not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_category_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let stores = CategoryService::new(&state.db).stores(category_id).await?;

    let dtos: Vec<StoreDto> = stores
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_category_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let products = CategoryService::new(&state.db).products(category_id).await?;

    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| p.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Sectors that contain at least one store tagged with the category.
pub async fn get_category_sectors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let sectors = CategoryService::new(&state.db).sectors(category_id).await?;

    let dtos: Vec<SectorDto> = sectors.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
