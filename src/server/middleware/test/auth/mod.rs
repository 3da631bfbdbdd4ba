use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use entity::sea_orm_active_enums::AccountRole;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{role_allows, Action, AuthGuard, Permission, Resource},
    service::{auth::AuthService, token::TokenService},
};

mod require;
mod role_allows;

fn token_service() -> TokenService {
    TokenService::new(
        "test-secret-that-is-at-least-32-bytes-long",
        Duration::minutes(5),
        Duration::days(1),
    )
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
