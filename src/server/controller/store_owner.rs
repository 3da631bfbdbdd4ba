use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::store_owner::{StoreOwnerDto, StoreOwnerInputDto, StoreOwnerPatchDto},
    server::{
        controller::{ensure_self_or_admin, require_viewer, NameFilter},
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::store_owner::UpdateStoreOwnerParams,
        service::store_owner::StoreOwnerService,
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::StoreOwner, Action::View);

pub async fn get_store_owners(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let owners = StoreOwnerService::new(&state.db)
        .get_all(filter.term())
        .await?;

    let dtos: Vec<StoreOwnerDto> = owners
        .into_iter()
        .map(|o| o.into_dto(&state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_store_owner_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    match StoreOwnerService::new(&state.db).get_by_id(owner_id).await? {
        Some(owner) => Ok((StatusCode::OK, Json(owner.into_dto(&state.media_url)))),
        None => Err(AppError::NotFound("Store owner not found".to_string())),
    }
}

/// Replace a store owner profile.
///
/// # Access Control
/// - `StoreOwner` / `Update` - The owner themselves, or an admin
pub async fn update_store_owner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(owner_id): Path<i32>,
    Json(payload): Json<StoreOwnerInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::StoreOwner, Action::Update)],
    )
    .await?;
    ensure_self_or_admin(&viewer, viewer.store_owner_id, owner_id, "store owner")?;
    payload.validate()?;

    match StoreOwnerService::new(&state.db)
        .update(owner_id, UpdateStoreOwnerParams::from_put(payload))
        .await?
    {
        Some(owner) => Ok((StatusCode::OK, Json(owner.into_dto(&state.media_url)))),
        None => Err(AppError::NotFound("Store owner not found".to_string())),
    }
}

pub async fn patch_store_owner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(owner_id): Path<i32>,
    Json(payload): Json<StoreOwnerPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::StoreOwner, Action::Update)],
    )
    .await?;
    ensure_self_or_admin(&viewer, viewer.store_owner_id, owner_id, "store owner")?;
    payload.validate()?;

    match StoreOwnerService::new(&state.db)
        .update(owner_id, UpdateStoreOwnerParams::from_patch(payload))
        .await?
    {
        Some(owner) => Ok((StatusCode::OK, Json(owner.into_dto(&state.media_url)))),
        None => Err(AppError::NotFound("Store owner not found".to_string())),
    }
}

/// Delete a store owner, their account and their stores.
///
/// # Access Control
/// - `StoreOwner` / `Delete` - Admins only
pub async fn delete_store_owner(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(owner_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::StoreOwner, Action::Delete)],
    )
    .await?;

    if !StoreOwnerService::new(&state.db).delete(owner_id).await? {
        return Err(AppError::NotFound("Store owner not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
