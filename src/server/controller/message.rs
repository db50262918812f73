//! Admin message management endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::OkDto,
        message::{CreateMessageDto, UpdateMessageDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::message::{CreateMessageParam, UpdateMessageParam},
        service::message::MessageService,
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
    10
}

/// Parses an optional ISO-8601 schedule time from a DTO.
fn parse_scheduled_at(value: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(raw) = value else {
        return Ok(None);
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|_| AppError::BadRequest(format!("Invalid schedule time: {raw}")))?;

    Ok(Some(parsed.with_timezone(&Utc)))
}

/// Get paginated messages for the dashboard table.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Page of messages, newest first
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let message_service = MessageService::new(&state.db);
    let page = message_service
        .get_paginated(context.mosque.id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Create a draft or scheduled message.
///
/// A `scheduled_at` in the body makes the message "scheduled" for the
/// dispatch job, otherwise it is stored as a "draft".
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `201 Created` - The created message
/// - `400 Bad Request` - Empty title/body or malformed schedule time
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn create_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let scheduled_at = parse_scheduled_at(payload.scheduled_at.as_deref())?;

    let message_service = MessageService::new(&state.db);
    let message = message_service
        .create(CreateMessageParam {
            mosque_id: context.mosque.id,
            title: payload.title,
            body: payload.body,
            category: payload.category,
            scheduled_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Update an unsent message.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - The updated message
/// - `400 Bad Request` - Already sent, empty fields, or malformed time
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such message
/// - `500 Internal Server Error` - Database error
pub async fn update_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let scheduled_at = parse_scheduled_at(payload.scheduled_at.as_deref())?;

    let message_service = MessageService::new(&state.db);
    let message = message_service
        .update(
            context.mosque.id,
            id,
            UpdateMessageParam {
                title: payload.title,
                body: payload.body,
                category: payload.category,
                scheduled_at,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// Delete an unsent message.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Message deleted
/// - `400 Bad Request` - Message already sent
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such message
/// - `500 Internal Server Error` - Database error
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let message_service = MessageService::new(&state.db);
    message_service.delete(context.mosque.id, id).await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Send a draft or scheduled message immediately.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - The message with its delivery bookkeeping
/// - `400 Bad Request` - Message already sent
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such message
/// - `500 Internal Server Error` - Delivery or database error
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let message_service = MessageService::new(&state.db);
    let message = message_service
        .send_now(&state.whatsapp, context.mosque.id, id)
        .await?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}
