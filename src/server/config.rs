use crate::server::error::{config::ConfigError, AppError};

/// Settings for one sliding-window rate limit.
#[derive(Clone, Copy, Debug)]
pub struct RateLimitWindow {
    pub limit: u32,
    pub window_secs: u32,
}

/// Public subscribe endpoint: 10 requests per minute per client IP.
pub const SUBSCRIBE_RATE_LIMIT: RateLimitWindow = RateLimitWindow {
    limit: 10,
    window_secs: 60,
};

/// Inbound WhatsApp webhook: 30 requests per minute per client IP.
pub const WEBHOOK_RATE_LIMIT: RateLimitWindow = RateLimitWindow {
    limit: 30,
    window_secs: 60,
};

pub struct Config {
    pub database_url: String,

    /// Shared secret the WhatsApp gateway must present on webhook calls.
    pub webhook_verify_token: String,

    /// Hosted sliding-window rate limiter. Unset disables rate limiting.
    pub rate_limit_url: Option<String>,
    pub rate_limit_token: Option<String>,

    /// Outbound WhatsApp gateway. Unset logs sends instead of delivering.
    pub whatsapp_api_url: Option<String>,
    pub whatsapp_api_token: Option<String>,

    /// Storage signer issuing direct-upload URLs for audio files.
    pub storage_api_url: Option<String>,
    pub storage_api_token: Option<String>,

    /// First-run seed values used when the database has no mosque yet.
    pub mosque_name: String,
    pub admin_email: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            webhook_verify_token: std::env::var("WEBHOOK_VERIFY_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("WEBHOOK_VERIFY_TOKEN".to_string()))?,
            rate_limit_url: std::env::var("RATE_LIMIT_URL").ok(),
            rate_limit_token: std::env::var("RATE_LIMIT_TOKEN").ok(),
            whatsapp_api_url: std::env::var("WHATSAPP_API_URL").ok(),
            whatsapp_api_token: std::env::var("WHATSAPP_API_TOKEN").ok(),
            storage_api_url: std::env::var("STORAGE_API_URL").ok(),
            storage_api_token: std::env::var("STORAGE_API_TOKEN").ok(),
            mosque_name: std::env::var("MOSQUE_NAME")
                .map_err(|_| ConfigError::MissingEnvVar("MOSQUE_NAME".to_string()))?,
            admin_email: std::env::var("ADMIN_EMAIL")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()))?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?,
        })
    }
}
