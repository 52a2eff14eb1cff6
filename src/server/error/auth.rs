use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session; the request is anonymous.
    #[error("User not found in session")]
    UserNotInSession,

    /// The session references a user that no longer exists.
    ///
    /// Happens when an account is deleted while one of its sessions is still alive.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a required permission.
    ///
    /// # Fields
    /// - User id of the requester
    /// - Description of the denied action, logged server-side
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Login attempted with an unknown email or a wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password change attempted with a wrong current password.
    #[error("Current password is incorrect")]
    WrongPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidCredentials` / `WrongPassword` → 400 Bad Request
///
/// Denials are logged at debug level; the client only gets a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication credentials were not provided".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You do not have permission to perform this action".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials | Self::WrongPassword => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
