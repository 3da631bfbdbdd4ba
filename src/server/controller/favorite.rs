//! Favorite-product and favorite-store rows.
//!
//! Admins see and manage every row. Shoppers see only their own rows and may only
//! delete those; other roles are refused.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::favorite::{
        FavoriteProductDto, FavoriteProductInputDto, FavoriteStoreDto, FavoriteStoreInputDto,
    },
    server::{
        controller::{acting_shopper, ensure_self_or_admin, require_viewer},
        error::{auth::AuthError, AppError},
        middleware::auth::{Action, Permission, Resource},
        model::account::Viewer,
        service::favorite::FavoriteService,
        state::AppState,
    },
};

/// Shopper whose rows a listing is limited to; `None` lists every row.
fn listing_scope(viewer: &Viewer) -> Result<Option<i32>, AppError> {
    if viewer.is_admin() {
        return Ok(None);
    }

    match viewer.shopper_id {
        Some(shopper_id) => Ok(Some(shopper_id)),
        None => Err(AuthError::AccessDenied(
            viewer.account_id,
            "account has no shopper profile".to_string(),
        )
        .into()),
    }
}

pub async fn get_favorite_products(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteProduct, Action::View)],
    )
    .await?;

    let favorites = FavoriteService::new(&state.db)
        .get_products(listing_scope(&viewer)?)
        .await?;

    let dtos: Vec<FavoriteProductDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Favorite a product.
///
/// # Returns
/// - `201 Created` - The new favorite row
/// - `400 Bad Request` - Unknown product, or already favorited
pub async fn create_favorite_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FavoriteProductInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteProduct, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let shopper_id = acting_shopper(&viewer, payload.cliente)?;
    let favorite = FavoriteService::new(&state.db)
        .add_product(shopper_id, payload.produto)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

pub async fn get_favorite_product_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteProduct, Action::View)],
    )
    .await?;
    let scope = listing_scope(&viewer)?;

    match FavoriteService::new(&state.db).get_product(favorite_id).await? {
        Some(favorite) if scope.is_none_or(|id| id == favorite.shopper_id) => {
            Ok((StatusCode::OK, Json(favorite.into_dto())))
        }
        _ => Err(AppError::NotFound("Favorite not found".to_string())),
    }
}

pub async fn delete_favorite_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteProduct, Action::Delete)],
    )
    .await?;

    let service = FavoriteService::new(&state.db);
    let Some(favorite) = service.get_product(favorite_id).await? else {
        return Err(AppError::NotFound("Favorite not found".to_string()));
    };
    ensure_self_or_admin(&viewer, viewer.shopper_id, favorite.shopper_id, "favorite of shopper")?;

    service.delete_product(favorite.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_favorite_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteStore, Action::View)],
    )
    .await?;

    let favorites = FavoriteService::new(&state.db)
        .get_stores(listing_scope(&viewer)?)
        .await?;

    let dtos: Vec<FavoriteStoreDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Favorite a store.
///
/// # Returns
/// - `201 Created` - The new favorite row
/// - `400 Bad Request` - Unknown store, or already favorited
pub async fn create_favorite_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<FavoriteStoreInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteStore, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let shopper_id = acting_shopper(&viewer, payload.cliente)?;
    let favorite = FavoriteService::new(&state.db)
        .add_store(shopper_id, payload.loja)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite.into_dto())))
}

pub async fn get_favorite_store_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteStore, Action::View)],
    )
    .await?;
    let scope = listing_scope(&viewer)?;

    match FavoriteService::new(&state.db).get_store(favorite_id).await? {
        Some(favorite) if scope.is_none_or(|id| id == favorite.shopper_id) => {
            Ok((StatusCode::OK, Json(favorite.into_dto())))
        }
        _ => Err(AppError::NotFound("Favorite not found".to_string())),
    }
}

pub async fn delete_favorite_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(favorite_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteStore, Action::Delete)],
    )
    .await?;

    let service = FavoriteService::new(&state.db);
    let Some(favorite) = service.get_store(favorite_id).await? else {
        return Err(AppError::NotFound("Favorite not found".to_string()));
    };
    ensure_self_or_admin(&viewer, viewer.shopper_id, favorite.shopper_id, "favorite of shopper")?;

    service.delete_store(favorite.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
