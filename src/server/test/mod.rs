//! Request-level tests driving the full router with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Duration;
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, service::token::TokenService, state::AppState};

mod account;
mod kiosk;
mod store;

fn tokens() -> TokenService {
    TokenService::new(
        "test-secret-that-is-at-least-32-bytes-long",
        Duration::minutes(5),
        Duration::days(1),
    )
}

fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone(), tokens(), "/media/".to_string()))
}

/// Access token for the account, signed with the same key `app` validates with.
fn access_for(account_id: i32) -> String {
    tokens().issue_pair(account_id).unwrap().access
}

fn with_token(mut request: Request<Body>, access: &str) -> Request<Body> {
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {}", access).parse().unwrap(),
    );
    request
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str, access: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = access {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
