//! Admin mosque settings endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::mosque::MosqueSettingsDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::mosque::UpdateMosqueParam,
        service::mosque::MosqueService,
        state::AppState,
    },
};

/// Get the mosque's full configuration.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Full settings including calculation method and madhab
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(context.mosque.into_settings_dto())))
}

/// Update the mosque's configuration.
///
/// The body is a full replacement of the editable fields.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Updated settings
/// - `400 Bad Request` - Empty name or unknown timezone
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MosqueSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let mosque_service = MosqueService::new(&state.db);
    let updated = mosque_service
        .update_settings(
            context.mosque.id,
            UpdateMosqueParam {
                name: payload.name,
                timezone: payload.timezone,
                calculation_method: payload.calculation_method,
                madhab: payload.madhab,
                ramadan_mode: payload.ramadan_mode,
                reminder_offset_minutes: payload.reminder_offset_minutes,
                whatsapp_number: payload.whatsapp_number,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(updated.into_settings_dto())))
}
