//! Public subscription endpoints.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::OkDto,
        subscriber::{PushSubscriptionDto, SubscribeRequestDto},
    },
    server::{
        config::SUBSCRIBE_RATE_LIMIT,
        controller::client_ip,
        error::AppError,
        service::{mosque::MosqueService, subscriber::SubscriberService},
        state::AppState,
    },
};

/// Subscribes a phone number from the public landing page form.
///
/// Rate limited per client address. Re-subscribing an unsubscribed number
/// reactivates it with the submitted preferences.
///
/// # Arguments
/// - `state` - Application state
/// - `headers` - Request headers, read for the forwarded client address
/// - `payload` - Phone and category opt-ins
///
/// # Returns
/// - `201 Created` - Subscriber active
/// - `400 Bad Request` - Invalid phone number
/// - `429 Too Many Requests` - Rate limit exceeded
/// - `500 Internal Server Error` - Database error
pub async fn subscribe(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SubscribeRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    state
        .rate_limiter
        .check("subscribe", &client_ip(&headers), SUBSCRIBE_RATE_LIMIT)
        .await?;

    let mosque = MosqueService::new(&state.db).require_default().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    let subscriber = subscriber_service
        .subscribe(
            mosque.id,
            &payload.phone,
            payload.notify_announcements,
            payload.notify_prayer_reminders,
            payload.notify_audio,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(subscriber.into_dto())))
}

/// Stores Web Push keys for an existing subscriber.
///
/// Called by the service worker registration flow after the browser grants
/// notification permission.
///
/// # Returns
/// - `200 OK` - Keys stored
/// - `400 Bad Request` - Invalid phone number
/// - `404 Not Found` - Phone is not subscribed
/// - `500 Internal Server Error` - Database error
pub async fn push_subscribe(
    State(state): State<AppState>,
    Json(payload): Json<PushSubscriptionDto>,
) -> Result<impl IntoResponse, AppError> {
    let mosque = MosqueService::new(&state.db).require_default().await?;

    let subscriber_service = SubscriberService::new(&state.db);
    subscriber_service
        .set_push_subscription(mosque.id, payload)
        .await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}
