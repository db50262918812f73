//! Admin subscriber management endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::OkDto,
        subscriber::{
            ImportRequestDto, ImportResultDto, SubscribeRequestDto, UpdateSubscriberDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::subscriber::{SubscriberStatus, UpdateSubscriberParam},
        service::subscriber::SubscriberService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    25
}

/// Get paginated subscribers for the dashboard table.
///
/// # Access Control
/// - Admin session required
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Admin's session for authentication
/// - `params` - Pagination parameters (page and entries)
///
/// # Returns
/// - `200 OK` - Page of subscribers, newest first
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_subscribers(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    let page = subscriber_service
        .get_paginated(context.mosque.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Create a subscriber from the dashboard.
///
/// Reuses the public subscribe path, so an existing number is reactivated
/// rather than duplicated.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `201 Created` - Subscriber active
/// - `400 Bad Request` - Invalid phone number
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn create_subscriber(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SubscribeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    let subscriber = subscriber_service
        .subscribe(
            context.mosque.id,
            &payload.phone,
            payload.notify_announcements,
            payload.notify_prayer_reminders,
            payload.notify_audio,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(subscriber.into_dto())))
}

/// Update a subscriber's status and notification preferences.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Updated subscriber
/// - `400 Bad Request` - Unknown status value
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such subscriber
/// - `500 Internal Server Error` - Database error
pub async fn update_subscriber(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSubscriberDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let Some(status) = SubscriberStatus::parse(&payload.status) else {
        return Err(AppError::BadRequest(format!(
            "Unknown status: {}",
            payload.status
        )));
    };

    let subscriber_service = SubscriberService::new(&state.db);
    let subscriber = subscriber_service
        .update(
            context.mosque.id,
            id,
            UpdateSubscriberParam {
                status,
                notify_announcements: payload.notify_announcements,
                notify_prayer_reminders: payload.notify_prayer_reminders,
                notify_audio: payload.notify_audio,
                reminder_offset_minutes: payload.reminder_offset_minutes,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(subscriber.into_dto())))
}

/// Delete a subscriber.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Subscriber removed
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such subscriber
/// - `500 Internal Server Error` - Database error
pub async fn delete_subscriber(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    subscriber_service.delete(context.mosque.id, id).await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Bulk import subscribers.
///
/// Accepts up to 1000 candidate records, validates each phone
/// independently, and inserts valid ones in batches with duplicates
/// deduplicated against existing rows.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Counts of imported, skipped, and errored records
/// - `400 Bad Request` - Empty request or size cap exceeded
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn import_subscribers(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<ImportRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    let outcome = subscriber_service
        .import(context.mosque.id, payload.subscribers)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ImportResultDto {
            imported: outcome.imported,
            skipped: outcome.skipped,
            errors: outcome.errors,
        }),
    ))
}
