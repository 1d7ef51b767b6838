use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Signup attempted with a username that already has an account.
    ///
    /// Raised from the unique index on `user.username`, so concurrent signups for the
    /// same name cannot both succeed.
    #[error("Username already exists")]
    UsernameTaken,

    /// Login attempted with a password that does not match the stored hash.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// bcrypt failed to hash or verify a password.
    #[error("Failed to process password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UsernameTaken` → 400 Bad Request
/// - `InvalidCredentials` → 401 Unauthorized
/// - `PasswordHash` → 500 Internal Server Error with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UsernameTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}
