use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent with the request.
    #[error("Request did not include a bearer token")]
    MissingToken,

    /// Token failed signature, expiry, or type validation.
    ///
    /// The reason is logged at debug level and never sent to the client.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token carries a `jti` that is on the revocation list.
    #[error("Token {0} has been revoked")]
    RevokedToken(String),

    /// Login attempted with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token subject does not match an active account.
    #[error("Account {0} not found or inactive")]
    AccountNotFound(i32),

    /// Account is authenticated but lacks the permission for the operation.
    ///
    /// # Fields
    /// - Account ID
    /// - Description of the denied operation, for logs
    #[error("Account {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` → 401 Unauthorized with "Authentication credentials were not provided"
/// - `InvalidToken` / `RevokedToken` / `AccountNotFound` → 401 Unauthorized with "Token is invalid or expired"
/// - `InvalidCredentials` → 401 Unauthorized with "No active account found with the given credentials"
/// - `AccessDenied` → 403 Forbidden with "You do not have permission to perform this action"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.",
            ),
            Self::InvalidToken(_) | Self::RevokedToken(_) | Self::AccountNotFound(_) => {
                (StatusCode::UNAUTHORIZED, "Token is invalid or expired.")
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "No active account found with the given credentials.",
            ),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
