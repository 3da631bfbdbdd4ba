//! HTTP handlers for the `/api` routes.
//!
//! Handlers authenticate through `AuthGuard`, validate request bodies, convert DTOs
//! into service parameters and convert the returned domain models back into DTOs
//! for the current viewer.

pub mod account;
pub mod auth;
pub mod category;
pub mod favorite;
pub mod health;
pub mod kiosk;
pub mod product;
pub mod recommendation;
pub mod review;
pub mod search;
pub mod sector;
pub mod shopper;
pub mod store;
pub mod store_owner;
pub mod user_action;

use axum::http::HeaderMap;
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::account::Viewer,
    service::account::AccountService,
    state::AppState,
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_page() -> u64 {
    1
}

fn default_entries() -> u64 {
    10
}

impl PaginationParams {
    /// Page size clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, 100)
    }
}

/// `?nome=` filter accepted by list endpoints.
#[derive(Deserialize)]
pub struct NameFilter {
    pub nome: Option<String>,
}

impl NameFilter {
    pub fn term(&self) -> Option<&str> {
        self.nome
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Runs the guard and loads the viewer the response will be projected for.
pub async fn require_viewer(
    state: &AppState,
    headers: &HeaderMap,
    permissions: &[Permission],
) -> Result<Viewer, AppError> {
    let account = AuthGuard::new(&state.db, &state.tokens, headers)
        .require(permissions)
        .await?;

    AccountService::new(&state.db).viewer(&account).await
}

/// Shopper a favorite or review is created for.
///
/// Shoppers always act as themselves. Admins name the shopper in `cliente`.
pub fn acting_shopper(viewer: &Viewer, requested: Option<i32>) -> Result<i32, AppError> {
    if viewer.is_admin() {
        return requested
            .ok_or_else(|| AppError::field("cliente", "required", "This field is required."));
    }

    viewer.shopper_id.ok_or_else(|| {
        AuthError::AccessDenied(viewer.account_id, "account has no shopper profile".to_string())
            .into()
    })
}

/// Fails with 403 unless the viewer is an admin or `own_id` is `target_id`.
pub fn ensure_self_or_admin(
    viewer: &Viewer,
    own_id: Option<i32>,
    target_id: i32,
    what: &str,
) -> Result<(), AppError> {
    if viewer.is_admin() || own_id == Some(target_id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        viewer.account_id,
        format!("attempted to modify {} {} of another account", what, target_id),
    )
    .into())
}
