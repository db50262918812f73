//! Inbound WhatsApp webhook endpoint.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    model::api::OkDto,
    server::{
        config::WEBHOOK_RATE_LIMIT,
        controller::client_ip,
        error::{auth::AuthError, AppError},
        service::{mosque::MosqueService, subscriber::SubscriberService},
        state::AppState,
    },
};

/// Body posted by the WhatsApp gateway for an inbound message.
///
/// # Fields
/// - `token` - Shared secret that must match the configured verify token
/// - `from` - Sender phone number
/// - `text` - Message body
#[derive(Deserialize)]
pub struct WebhookPayload {
    /// Shared secret configured on both sides of the gateway.
    pub token: String,
    /// Sender phone number in any accepted format.
    pub from: String,
    /// Plain text message body.
    pub text: String,
}

/// Handles an inbound WhatsApp message.
///
/// Rate limited per client address. The gateway authenticates with a shared
/// verify token; recognized STOP/START/PAUSE commands update the sender's
/// subscription status, anything else is acknowledged and ignored so the
/// gateway does not retry.
///
/// # Returns
/// - `200 OK` - Message processed (or ignored)
/// - `403 Forbidden` - Verify token mismatch
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database error
pub async fn whatsapp_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WebhookPayload>,
) -> Result<impl IntoResponse, AppError> {
    state
        .rate_limiter
        .check("webhook", &client_ip(&headers), WEBHOOK_RATE_LIMIT)
        .await?;

    if payload.token != state.webhook_verify_token {
        return Err(AuthError::WebhookTokenMismatch.into());
    }

    let mosque = MosqueService::new(&state.db).require_default().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    let applied = subscriber_service
        .apply_webhook_command(mosque.id, &payload.from, &payload.text)
        .await;

    // Acknowledge even when the command could not be applied; a validation
    // failure here is the sender's typo, not a gateway delivery problem.
    if let Err(e) = applied {
        tracing::debug!("Ignored webhook message: {}", e);
    }

    Ok((StatusCode::OK, Json(OkDto::new())))
}
