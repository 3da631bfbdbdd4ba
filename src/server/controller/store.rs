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
        favorite::FavoriteStoreDto,
        product::ProductDto,
        store::{StoreDto, StoreInputDto, StorePatchDto},
        user_action::UserActionDto,
    },
    server::{
        controller::{require_viewer, NameFilter, PaginationParams},
        error::{auth::AuthError, AppError},
        middleware::auth::{Action, Permission, Resource},
        model::{
            account::Viewer,
            store::{CreateStoreParams, UpdateStoreParams},
        },
        service::{store::StoreService, user_action::UserActionService},
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::Store, Action::View);

/// List stores, optionally filtered by `?nome=` substring.
///
/// # Access Control
/// - `Store` / `View`
pub async fn get_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let stores = StoreService::new(&state.db).get_all(filter.term()).await?;

    let dtos: Vec<StoreDto> = stores
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a store by ID.
///
/// Records a `visualizou_loja` entry in the audit log for the requesting account.
///
/// # Returns
/// - `200 OK` - Store details with average rating and `favoritado`
/// - `404 Not Found` - No store with this ID
pub async fn get_store_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let Some(store) = StoreService::new(&state.db).get_by_id(store_id).await? else {
        return Err(AppError::NotFound("Store not found".to_string()));
    };

    UserActionService::new(&state.db)
        .record_store_view(viewer.account_id, store.id, &store.name)
        .await;

    Ok((StatusCode::OK, Json(store.into_dto(&viewer, &state.media_url))))
}

/// Create a store.
///
/// Store owners always create stores under their own profile; admins name the owner
/// in `lojista`.
///
/// # Access Control
/// - `Store` / `Create` - Store owners and admins
///
/// # Returns
/// - `201 Created` - The new store
/// - `400 Bad Request` - Invalid fields or unknown owner, sector or category
pub async fn create_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StoreInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Store, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let owner_id = acting_owner(&viewer, payload.lojista)?;
    let store = StoreService::new(&state.db)
        .create(CreateStoreParams::from_dto(owner_id, payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(store.into_dto(&viewer, &state.media_url)),
    ))
}

/// Replace a store.
///
/// Only admins can move a store to another owner.
pub async fn update_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
    Json(payload): Json<StoreInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Store, Action::Update)],
    )
    .await?;
    payload.validate()?;

    let owner_id = if viewer.is_admin() { payload.lojista } else { None };
    let params = UpdateStoreParams::from_put(owner_id, payload);

    let Some(store) = StoreService::new(&state.db).update(store_id, params).await? else {
        return Err(AppError::NotFound("Store not found".to_string()));
    };

    Ok((StatusCode::OK, Json(store.into_dto(&viewer, &state.media_url))))
}

/// Partially update a store.
pub async fn patch_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
    Json(payload): Json<StorePatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Store, Action::Update)],
    )
    .await?;
    payload.validate()?;

    let owner_id = if viewer.is_admin() { payload.lojista } else { None };
    let params = UpdateStoreParams::from_patch(owner_id, payload);

    let Some(store) = StoreService::new(&state.db).update(store_id, params).await? else {
        return Err(AppError::NotFound("Store not found".to_string()));
    };

    Ok((StatusCode::OK, Json(store.into_dto(&viewer, &state.media_url))))
}

/// Delete a store together with its products, reviews and favorites.
///
/// # Returns
/// - `204 No Content` - Store deleted
/// - `404 Not Found` - No store with this ID
pub async fn delete_store(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Store, Action::Delete)],
    )
    .await?;

    if !StoreService::new(&state.db).delete(store_id).await? {
        return Err(AppError::NotFound("Store not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Paginated reviews of a store, newest first.
///
/// `page` is one-based and defaults to 1; `entries` defaults to 10 and is clamped to 1..=100.
pub async fn get_store_reviews(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let reviews = StoreService::new(&state.db)
        .reviews(store_id, params.page, params.per_page())
        .await?;

    Ok((StatusCode::OK, Json(reviews.into_dto())))
}

pub async fn get_store_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let products = StoreService::new(&state.db).products(store_id).await?;

    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| p.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_store_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let categories = StoreService::new(&state.db).categories(store_id).await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Audit-log entries referencing the store.
///
/// # Access Control
/// - `UserAction` / `View` - Admins only
pub async fn get_store_actions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::UserAction, Action::View)],
    )
    .await?;

    let actions = StoreService::new(&state.db).actions(store_id).await?;

    let dtos: Vec<UserActionDto> = actions.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_store_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(store_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteStore, Action::View)],
    )
    .await?;

    let favorites = StoreService::new(&state.db).favorites(store_id).await?;

    let dtos: Vec<FavoriteStoreDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Owner a new store is created for.
fn acting_owner(viewer: &Viewer, requested: Option<i32>) -> Result<i32, AppError> {
    if viewer.is_admin() {
        return requested
            .ok_or_else(|| AppError::field("lojista", "required", "This field is required."));
    }

    viewer.store_owner_id.ok_or_else(|| {
        AuthError::AccessDenied(
            viewer.account_id,
            "account has no store owner profile".to_string(),
        )
        .into()
    })
}
