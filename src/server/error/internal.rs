use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Argon2 failed to hash a password.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// Failure to sign a JWT.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),

    /// A row that was just written could not be read back.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Primary key that was written
        id: i32,
    },

    /// Binding or serving the listening socket failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
