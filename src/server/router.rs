use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{audio, auth, message, mosque, prayer_time, settings, subscribe, subscriber, webhook},
    state::AppState,
};

/// Builds the API router.
///
/// Public endpoints sit next to the admin ones; access control happens in
/// the handlers through `AuthGuard`, not in the routing table.
pub fn router() -> Router<AppState> {
    Router::new()
        // Public
        .route("/api/mosque", get(mosque::get_mosque_info))
        .route("/api/subscribe", post(subscribe::subscribe))
        .route("/api/push/subscribe", post(subscribe::push_subscribe))
        .route("/api/webhook/whatsapp", post(webhook::whatsapp_webhook))
        // Auth
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        // Admin: subscribers
        .route(
            "/api/admin/subscribers",
            get(subscriber::get_subscribers).post(subscriber::create_subscriber),
        )
        .route(
            "/api/admin/subscribers/{id}",
            put(subscriber::update_subscriber).delete(subscriber::delete_subscriber),
        )
        .route(
            "/api/admin/subscribers/import",
            post(subscriber::import_subscribers),
        )
        // Admin: messages
        .route(
            "/api/admin/messages",
            get(message::get_messages).post(message::create_message),
        )
        .route(
            "/api/admin/messages/{id}",
            put(message::update_message).delete(message::delete_message),
        )
        .route("/api/admin/messages/{id}/send", post(message::send_message))
        // Admin: audio
        .route(
            "/api/admin/audio/collections",
            get(audio::get_collections).post(audio::create_collection),
        )
        .route(
            "/api/admin/audio/collections/{id}",
            axum::routing::delete(audio::delete_collection),
        )
        .route(
            "/api/admin/audio/collections/{id}/files",
            get(audio::get_files).post(audio::create_file),
        )
        .route(
            "/api/admin/audio/collections/{id}/upload-url",
            post(audio::create_upload_url),
        )
        .route(
            "/api/admin/audio/collections/{collection_id}/files/{id}",
            axum::routing::delete(audio::delete_file),
        )
        // Admin: prayer timetable
        .route(
            "/api/admin/prayer-times",
            get(prayer_time::get_prayer_times).put(prayer_time::upsert_prayer_times),
        )
        // Admin: settings
        .route(
            "/api/admin/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
}
