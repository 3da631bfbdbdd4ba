//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token service holding the JWT signing keys and lifetimes
//! - Public URL prefix of uploaded media, used to build image URLs

use sea_orm::DatabaseConnection;

use crate::server::service::token::TokenService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and the token keys are small byte buffers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and validates access and refresh tokens.
    pub tokens: TokenService,

    /// Prefix prepended to stored media paths, always ending in `/`.
    pub media_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, tokens: TokenService, media_url: String) -> Self {
        Self {
            db,
            tokens,
            media_url,
        }
    }
}
