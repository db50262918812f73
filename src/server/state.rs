//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool, `reqwest::Client` is
//! `Arc`-backed internally, and the hosted-service handles hold only a
//! client plus a small config snapshot.

use sea_orm::DatabaseConnection;

use super::service::{rate_limit::RateLimiter, storage::StorageClient, whatsapp::WhatsAppClient};

/// Application state containing shared resources and dependencies.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    pub http_client: reqwest::Client,

    /// Handle for the hosted sliding-window rate limiter.
    pub rate_limiter: RateLimiter,

    /// Handle for the outbound WhatsApp gateway.
    pub whatsapp: WhatsAppClient,

    /// Handle for the object-storage upload signer.
    pub storage: StorageClient,

    /// Shared secret expected on inbound webhook requests.
    pub webhook_verify_token: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after all dependencies have been
    /// initialized; the resulting state is provided to the Axum router.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `rate_limiter` - Hosted rate limiter handle
    /// - `whatsapp` - WhatsApp gateway handle
    /// - `storage` - Storage signer handle
    /// - `webhook_verify_token` - Shared webhook secret
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        rate_limiter: RateLimiter,
        whatsapp: WhatsAppClient,
        storage: StorageClient,
        webhook_verify_token: String,
    ) -> Self {
        Self {
            db,
            http_client,
            rate_limiter,
            whatsapp,
            storage,
            webhook_verify_token,
        }
    }
}
