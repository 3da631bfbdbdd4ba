//! Bearer-token authentication and role-based permission checks.
//!
//! Every protected handler builds an `AuthGuard` from the request headers and calls
//! `require` with the permissions the operation needs. Ownership rules that depend on
//! the target row (a shopper editing only their own profile, for instance) are checked
//! by the handler after the guard passes.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::{
        auth::AuthService,
        token::{Claims, TokenService},
    },
};

/// Model a permission check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Store,
    Product,
    Category,
    Sector,
    StoreOwner,
    Shopper,
    Review,
    FavoriteProduct,
    FavoriteStore,
    KioskSurvey,
    UserAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any active account with a valid access token.
    Authenticated,
    /// Coarse per-model permission granted by the account role.
    Model(Resource, Action),
}

/// Whether `role` is granted `action` on `resource`.
///
/// Admins may do anything. Everyone else may view everything except the audit log;
/// beyond that, shoppers write reviews, their favorites and their own profile, and
/// store owners manage stores, products and their own profile.
pub fn role_allows(role: AccountRole, resource: Resource, action: Action) -> bool {
    use Action::*;
    use Resource::*;

    match role {
        AccountRole::Admin => true,
        AccountRole::Shopper => match (resource, action) {
            (UserAction, View) => false,
            (_, View) => true,
            (Review, Create) => true,
            (FavoriteProduct | FavoriteStore, Create | Delete) => true,
            (Shopper, Update) => true,
            _ => false,
        },
        AccountRole::StoreOwner => match (resource, action) {
            (UserAction, View) => false,
            (_, View) => true,
            (Store | Product, Create | Update | Delete) => true,
            (StoreOwner, Update) => true,
            _ => false,
        },
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the request and checks every listed permission.
    ///
    /// # Returns
    /// - `Ok(account)` - Token valid and all permissions granted
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken | RevokedToken | AccountNotFound)` - Token rejected
    /// - `Err(AuthError::AccessDenied)` - First permission the account lacks
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::account::Model, AppError> {
        let (account, _) = self.authenticate().await?;

        for permission in permissions {
            match *permission {
                Permission::Authenticated => {}
                Permission::Model(resource, action) => {
                    if !role_allows(account.role, resource, action) {
                        return Err(AuthError::AccessDenied(
                            account.id,
                            format!("{:?} {:?} not granted to role {:?}", action, resource, account.role),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(account)
    }

    /// Authenticates the request and returns the account with its token claims.
    ///
    /// Logout needs the claims to revoke the access token it was called with.
    pub async fn authenticate(&self) -> Result<(entity::account::Model, Claims), AppError> {
        let token = bearer_token(self.headers)?;
        AuthService::new(self.db, self.tokens).authenticate(token).await
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken("authorization header is not ASCII".to_string()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::InvalidToken(
            "authorization header is not a bearer token".to_string(),
        )),
    }
}
