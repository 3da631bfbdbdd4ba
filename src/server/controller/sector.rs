use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        category::CategoryDto,
        sector::{SectorDto, SectorInputDto, SectorPatchDto},
        store::StoreDto,
    },
    server::{
        controller::{require_viewer, NameFilter},
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::sector::{CreateSectorParams, UpdateSectorParams},
        service::sector::SectorService,
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::Sector, Action::View);

/// Create a sector.
///
/// # Access Control
/// - `Sector` / `Create` - Admins only
pub async fn create_sector(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SectorInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Sector, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let sector = SectorService::new(&state.db)
        .create(CreateSectorParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(sector.into_dto())))
}

pub async fn get_sectors(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let sectors = SectorService::new(&state.db).get_all(filter.term()).await?;

    let dtos: Vec<SectorDto> = sectors.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_sector_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sector_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    match SectorService::new(&state.db).get_by_id(sector_id).await? {
        Some(sector) => Ok((StatusCode::OK, Json(sector.into_dto()))),
        None => Err(AppError::NotFound("Sector not found".to_string())),
    }
}

pub async fn update_sector(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sector_id): Path<i32>,
    Json(payload): Json<SectorInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Sector, Action::Update)],
    )
    .await?;
    payload.validate()?;

    match SectorService::new(&state.db)
        .update(sector_id, UpdateSectorParams::from_put(payload))
        .await?
    {
        Some(sector) => Ok((StatusCode::OK, Json(sector.into_dto()))),
        None => Err(AppError::NotFound("Sector not found".to_string())),
    }
}

pub async fn patch_sector(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sector_id): Path<i32>,
    Json(payload): Json<SectorPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Sector, Action::Update)],
    )
    .await?;
    payload.validate()?;

    match SectorService::new(&state.db)
        .update(sector_id, UpdateSectorParams::from_patch(payload))
        .await?
    {
        Some(sector) => Ok((StatusCode::OK, Json(sector.into_dto()))),
        None => Err(AppError::NotFound("Sector not found".to_string())),
    }
}

/// Delete a sector. Its stores stay, with no sector.
pub async fn delete_sector(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sector_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Sector, Action::Delete)],
    )
    .await?;

    if !SectorService::new(&state.db).delete(sector_id).await? {
        return Err(AppError::NotFound("Sector not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_sector_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sector_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let stores = SectorService::new(&state.db).stores(sector_id).await?;

    let dtos: Vec<StoreDto> = stores
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Categories carried by the sector's stores.
pub async fn get_sector_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(sector_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let categories = SectorService::new(&state.db).categories(sector_id).await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
