//! Public landing page endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::server::{error::AppError, service::mosque::MosqueService, state::AppState};

/// Returns the mosque's public info and today's prayer times.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Mosque info; `prayer_times` is null when no timetable row
///   exists for today
/// - `404 Not Found` - Database has not been seeded yet
/// - `500 Internal Server Error` - Database error
pub async fn get_mosque_info(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mosque_service = MosqueService::new(&state.db);
    let info = mosque_service.get_landing_info().await?;

    Ok((StatusCode::OK, Json(info)))
}
