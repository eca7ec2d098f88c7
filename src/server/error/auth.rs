use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// The request came from an anonymous session. Results in a 401 Unauthorized response.
    #[error("Failed to find user ID in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response; the stale session should sign in again.
    #[error("Failed to find user {0} from session in database")]
    UserNotInDatabase(i32),

    /// Sign-in attempt with an unknown username or a wrong password.
    ///
    /// Both cases share one message so that usernames cannot be probed.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// An admin endpoint received a password that doesn't match the admin secret.
    #[error("Invalid admin password")]
    InvalidAdminPassword,

    /// The argon2 hasher failed to hash a password or parse a stored hash.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not signed in"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `InvalidAdminPassword` → 401 Unauthorized with "Invalid password"
/// - `PasswordHash` → 500 Internal Server Error with generic message
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not signed in".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidAdminPassword => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid password".to_string(),
                }),
            )
                .into_response(),
            err @ Self::PasswordHash(_) => InternalServerError(err).into_response(),
        }
    }
}
