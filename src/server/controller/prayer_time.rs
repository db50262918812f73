//! Admin prayer timetable endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::prayer::PrayerTimesDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::prayer_time::UpsertPrayerDayParam,
        service::mosque::MosqueService,
        state::AppState,
    },
};

/// Query parameters for a timetable range request.
#[derive(Deserialize)]
pub struct RangeParams {
    /// Inclusive start date, `YYYY-MM-DD`.
    pub from: String,
    /// Inclusive end date, `YYYY-MM-DD`.
    pub to: String,
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid date: {value}")))
}

/// Get a date range of the prayer timetable.
///
/// # Access Control
/// - Admin session required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `params` - Inclusive date range
///
/// # Returns
/// - `200 OK` - Days in ascending date order
/// - `400 Bad Request` - Malformed or inverted range
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_prayer_times(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let from = parse_date(&params.from)?;
    let to = parse_date(&params.to)?;

    let mosque_service = MosqueService::new(&state.db);
    let days = mosque_service
        .get_prayer_range(context.mosque.id, from, to)
        .await?;

    let dtos: Vec<_> = days.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Insert or replace days of the prayer timetable.
///
/// Re-uploading a day overwrites its existing times instead of erroring, so
/// a monthly timetable can be pasted repeatedly while correcting mistakes.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - The stored days
/// - `400 Bad Request` - Empty request, malformed date, or malformed time
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn upsert_prayer_times(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<PrayerTimesDto>>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let mut days = Vec::with_capacity(payload.len());
    for dto in payload {
        days.push(UpsertPrayerDayParam {
            mosque_id: context.mosque.id,
            date: parse_date(&dto.date)?,
            fajr: dto.fajr,
            dhuhr: dto.dhuhr,
            asr: dto.asr,
            maghrib: dto.maghrib,
            isha: dto.isha,
            jumuah: dto.jumuah,
        });
    }

    let mosque_service = MosqueService::new(&state.db);
    let stored = mosque_service.upsert_prayer_days(days).await?;

    let dtos: Vec<_> = stored.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
