//! Authentication endpoints for the admin dashboard.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{admin::LoginRequestDto, api::OkDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Logs an admin in with email and password.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session the admin id is stored in on success
/// - `payload` - Login credentials
///
/// # Returns
/// - `200 OK` - Credentials valid, session established
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database or session error
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);
    let admin = auth_service
        .login(&payload.email, &payload.password)
        .await?;

    // Rotate the session id so a pre-login session cannot be replayed.
    session.cycle_id().await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_admin_id(admin.id).await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Logs the current admin out by clearing their session.
///
/// # Returns
/// - `200 OK` - Session cleared (idempotent)
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);
    auth_session.clear().await;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Returns the authenticated admin's identity.
///
/// The client calls this on load to decide whether to show the dashboard.
///
/// # Returns
/// - `200 OK` - Admin identity with their mosque name
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let mosque_name = context.mosque.name.clone();

    Ok((StatusCode::OK, Json(context.admin.into_dto(mosque_name))))
}
