use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No admin id in the session.
    ///
    /// The request reached an admin endpoint without an established session.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated admin in session")]
    AdminNotInSession,

    /// The session references an admin id that no longer exists.
    ///
    /// Happens when an admin account is deleted while a session for it is
    /// still live. Results in a 401 Unauthorized response.
    #[error("Admin {0} from session not found in database")]
    AdminNotInDatabase(i32),

    /// Email/password combination did not match any admin account.
    ///
    /// Deliberately indistinguishable between unknown email and wrong
    /// password. Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Webhook request carried a missing or wrong verify token.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Webhook verify token mismatch")]
    WebhookTokenMismatch,
}

/// Converts authentication errors into HTTP responses.
///
/// Session and credential failures map to 401 Unauthorized with a generic
/// message; webhook token mismatches map to 403 Forbidden. Details are logged
/// at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        match self {
            Self::AdminNotInSession | Self::AdminNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::WebhookTokenMismatch => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Forbidden".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
