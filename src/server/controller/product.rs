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
        favorite::FavoriteProductDto,
        product::{ProductDto, ProductInputDto, ProductPatchDto},
        store::StoreDto,
    },
    server::{
        controller::{require_viewer, NameFilter},
        error::AppError,
        middleware::auth::{Action, Permission, Resource},
        model::product::{CreateProductParams, UpdateProductParams},
        service::{product::ProductService, user_action::UserActionService},
        state::AppState,
    },
};

const VIEW: Permission = Permission::Model(Resource::Product, Action::View);

/// List products, optionally filtered by `?nome=` substring.
pub async fn get_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<NameFilter>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let products = ProductService::new(&state.db).get_all(filter.term()).await?;

    let dtos: Vec<ProductDto> = products
        .into_iter()
        .map(|p| p.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a product by ID.
///
/// Records a `visualizou_produto` entry in the audit log for the requesting account.
pub async fn get_product_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let Some(product) = ProductService::new(&state.db).get_by_id(product_id).await? else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    UserActionService::new(&state.db)
        .record_product_view(viewer.account_id, product.id, &product.name)
        .await;

    Ok((
        StatusCode::OK,
        Json(product.into_dto(&viewer, &state.media_url)),
    ))
}

/// Create a product in a store.
///
/// # Access Control
/// - `Product` / `Create` - Store owners and admins
///
/// # Returns
/// - `201 Created` - The new product
/// - `400 Bad Request` - Invalid fields or unknown store or category
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ProductInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Product, Action::Create)],
    )
    .await?;
    payload.validate()?;

    let product = ProductService::new(&state.db)
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(product.into_dto(&viewer, &state.media_url)),
    ))
}

pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
    Json(payload): Json<ProductInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Product, Action::Update)],
    )
    .await?;
    payload.validate()?;

    let Some(product) = ProductService::new(&state.db)
        .update(product_id, UpdateProductParams::from_put(payload))
        .await?
    else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(product.into_dto(&viewer, &state.media_url)),
    ))
}

pub async fn patch_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
    Json(payload): Json<ProductPatchDto>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Product, Action::Update)],
    )
    .await?;
    payload.validate()?;

    let Some(product) = ProductService::new(&state.db)
        .update(product_id, UpdateProductParams::from_patch(payload))
        .await?
    else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    Ok((
        StatusCode::OK,
        Json(product.into_dto(&viewer, &state.media_url)),
    ))
}

pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::Product, Action::Delete)],
    )
    .await?;

    if !ProductService::new(&state.db).delete(product_id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// The store carrying the product, as a one-element list.
pub async fn get_product_stores(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = require_viewer(&state, &headers, &[VIEW]).await?;

    let stores = ProductService::new(&state.db).stores(product_id).await?;

    let dtos: Vec<StoreDto> = stores
        .into_iter()
        .map(|s| s.into_dto(&viewer, &state.media_url))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_product_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(&state, &headers, &[VIEW]).await?;

    let categories = ProductService::new(&state.db).categories(product_id).await?;

    let dtos: Vec<CategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

pub async fn get_product_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = require_viewer(
        &state,
        &headers,
        &[Permission::Model(Resource::FavoriteProduct, Action::View)],
    )
    .await?;

    let favorites = ProductService::new(&state.db).favorites(product_id).await?;

    let dtos: Vec<FavoriteProductDto> = favorites.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
