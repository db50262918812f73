use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, put, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{mosque::MosqueSettingsDto, prayer::PrayerTimesDto},
};

/// GET /api/admin/settings
/// Get the mosque configuration
pub async fn get_settings() -> Result<MosqueSettingsDto, ApiError> {
    let response = send_request(get("/api/admin/settings")).await?;
    parse_response(response).await
}

/// PUT /api/admin/settings
/// Replace the mosque configuration
pub async fn update_settings(dto: MosqueSettingsDto) -> Result<MosqueSettingsDto, ApiError> {
    let body = serialize_json(&dto)?;
    let response = send_request(put("/api/admin/settings").body(body)).await?;
    parse_response(response).await
}

/// GET /api/admin/prayer-times?from=YYYY-MM-DD&to=YYYY-MM-DD
/// Get the prayer timetable for a date range
pub async fn get_prayer_times(from: &str, to: &str) -> Result<Vec<PrayerTimesDto>, ApiError> {
    let url = format!("/api/admin/prayer-times?from={}&to={}", from, to);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// PUT /api/admin/prayer-times
/// Create or replace timetable rows for the posted dates
pub async fn upsert_prayer_times(days: Vec<PrayerTimesDto>) -> Result<(), ApiError> {
    let body = serialize_json(&days)?;
    let response = send_request(put("/api/admin/prayer-times").body(body)).await?;
    parse_empty_response(response).await
}
