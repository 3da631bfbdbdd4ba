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
        product::ProductDto,
        shopper::{ShopperDto, ShopperInputDto, ShopperPatchDto},
        store::StoreDto,
    },
    server::{
        controller::{ensure_self_or_admin, require_viewer, NameFilter},
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::shopper::UpdateShopperParams,
        service::{favorite::FavoriteService, shopper::ShopperService},
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::Shopper, Action::View);

/// List shoppers, optionally filtered by `?nome=` substring.
pub async fn get_shoppers(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let shoppers = ShopperService::new(&state.db).get_all(filter.term()).await?;

    let dtos: Vec<ShopperDto> = shoppers
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_shopper_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    match ShopperService::new(&state.db).get_by_id(shopper_id).await? {
        Some(shopper) => Ok((
            StatusCode::OK,
            Json(shopper.into_dto(&viewer, &state.media_url)),
        )),
        None => Err(AppError::NotFound("Shopper not found".to_string())),
    }
}

/// Replace a shopper profile.
///
/// # Access Control
/// - `Shopper` / `Update` - The shopper themselves, or an admin
pub async fn update_shopper(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
    Json(payload): Json<ShopperInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Shopper, Action::Update)],
    )
    .await?;
    ensure_self_or_admin(&viewer, viewer.shopper_id, shopper_id, "shopper")?;
    payload.validate()?;

    match ShopperService::new(&state.db)
        .update(shopper_id, UpdateShopperParams::from_put(payload))
        .await?
    {
        Some(shopper) => Ok((
            StatusCode::OK,
            Json(shopper.into_dto(&viewer, &state.media_url)),
        )),
        None => Err(AppError::NotFound("Shopper not found".to_string())),
    }
}

pub async fn patch_shopper(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
    Json(payload): Json<ShopperPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Shopper, Action::Update)],
    )
    .await?;
    ensure_self_or_admin(&viewer, viewer.shopper_id, shopper_id, "shopper")?;
    payload.validate()?;

    match ShopperService::new(&state.db)
        .update(shopper_id, UpdateShopperParams::from_patch(payload))
        .await?
    {
        Some(shopper) => Ok((
            StatusCode::OK,
            Json(shopper.into_dto(&viewer, &state.media_url)),
        )),
        None => Err(AppError::NotFound("Shopper not found".to_string())),
    }
}

/// Delete a shopper and their account.
///
/// # Access Control
/// - `Shopper` / `Delete` - Admins only
pub async fn delete_shopper(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Shopper, Action::Delete)],
    )
    .await?;

    if !ShopperService::new(&state.db).delete(shopper_id).await? {
        return Err(AppError::NotFound("Shopper not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_desired_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let categories = ShopperService::new(&state.db)
        .desired_categories(shopper_id)
        .await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_favorite_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let products = ShopperService::new(&state.db)
        .favorite_products(shopper_id)
        .await?;

    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| p.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// One of the shopper's favorite products.
///
/// # Returns
/// - `404 Not Found` - Shopper missing or product not among their favorites
pub async fn get_favorite_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((shopper_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let product = ShopperService::new(&state.db)
        .favorite_product(shopper_id, product_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(product.into_dto(&viewer, &state.media_url)),
    ))
}

/// Remove a product from the shopper's favorites.
///
/// # Access Control
/// - `FavoriteProduct` / `Delete` - The shopper themselves, or an admin
pub async fn remove_favorite_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((shopper_id, product_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteProduct, Action::Delete)],
    )
    .await?;
    ensure_self_or_admin(&viewer, viewer.shopper_id, shopper_id, "favorites of shopper")?;

    if !FavoriteService::new(&state.db)
        .remove_product(shopper_id, product_id)
        .await?
    {
        return Err(AppError::NotFound("Favorite not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_favorite_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(shopper_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let stores = ShopperService::new(&state.db)
        .favorite_stores(shopper_id)
        .await?;

    let dtos: Vec<StoreDto> = stores
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_favorite_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((shopper_id, store_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let store = ShopperService::new(&state.db)
        .favorite_store(shopper_id, store_id)
        .await?;

    Ok((StatusCode::OK, Json(store.into_dto(&viewer, &state.media_url))))
}

pub async fn remove_favorite_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((shopper_id, store_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteStore, Action::Delete)],
    )
    .await?;
    ensure_self_or_admin(&viewer, viewer.shopper_id, shopper_id, "favorites of shopper")?;

    if !FavoriteService::new(&state.db)
        .remove_store(shopper_id, store_id)
        .await?
    {
        return Err(AppError::NotFound("Favorite not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
