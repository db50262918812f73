//! Client for the hosted sliding-window rate limiter.
//!
//! The limiter itself lives in an external service; this client only asks
//! "may this key proceed" per request. All window state and consistency
//! guarantees belong to the hosted side. The handle is constructed once at
//! startup and shared through `AppState` rather than lazily memoized, so a
//! misconfiguration surfaces at boot instead of on the first throttled
//! request.

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

use crate::server::{
    config::{Config, RateLimitWindow},
    error::AppError,
};

/// Remote endpoint and credential for the hosted limiter.
#[derive(Clone, Debug)]
struct LimiterTarget {
    base_url: String,
    token: String,
}

/// Request body for the hosted limiter's check endpoint.
#[derive(Serialize)]
struct LimitRequest<'a> {
    key: &'a str,
    limit: u32,
    window_secs: u32,
}

/// Response body from the hosted limiter's check endpoint.
#[derive(Deserialize)]
struct LimitResponse {
    allowed: bool,
}

/// Handle wrapping the hosted sliding-window counter service.
///
/// When the deployment has no limiter configured the handle is a no-op that
/// allows every request; this keeps local development working without the
/// hosted dependency.
#[derive(Clone)]
pub struct RateLimiter {
    http: reqwest::Client,
    target: Option<LimiterTarget>,
}

impl RateLimiter {
    /// Builds the limiter handle from configuration.
    ///
    /// Logs a warning when the limiter is disabled so an unthrottled
    /// production deployment is visible in the logs.
    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        let target = match (&config.rate_limit_url, &config.rate_limit_token) {
            (Some(url), Some(token)) => Some(LimiterTarget {
                base_url: url.trim_end_matches('/').to_string(),
                token: token.clone(),
            }),
            _ => {
                tracing::warn!("RATE_LIMIT_URL not set, rate limiting is disabled");
                None
            }
        };

        Self { http, target }
    }

    /// Checks one request against a named sliding window.
    ///
    /// The hosted key is `{scope}:{client_ip}` so each endpoint gets an
    /// independent window per client. When the hosted service itself fails
    /// the request is allowed and the failure logged; throttling is best
    /// effort, the endpoint must keep working.
    ///
    /// # Arguments
    /// - `scope` - Window name, e.g. "subscribe" or "webhook"
    /// - `client_ip` - Forwarded client address
    /// - `window` - Limit and window length for this scope
    ///
    /// # Returns
    /// - `Ok(())` - Request may proceed
    /// - `Err(AppError::RateLimited)` - The hosted limiter rejected the key
    pub async fn check(
        &self,
        scope: &str,
        client_ip: &str,
        window: RateLimitWindow,
    ) -> Result<(), AppError> {
        let Some(target) = &self.target else {
            return Ok(());
        };

        let key = format!("{scope}:{client_ip}");
        let response = self
            .http
            .post(format!("{}/v1/limit", target.base_url))
            .bearer_auth(&target.token)
            .json(&LimitRequest {
                key: &key,
                limit: window.limit,
                window_secs: window.window_secs,
            })
            .send()
            .await;

        let allowed = match response {
            Ok(response) => match response.error_for_status() {
                Ok(response) => response
                    .json::<LimitResponse>()
                    .await
                    .map(|r| r.allowed)
                    .unwrap_or_else(|e| {
                        tracing::warn!("Rate limiter returned unparseable body: {}", e);
                        true
                    }),
                Err(e) => {
                    tracing::warn!("Rate limiter returned error status: {}", e);
                    true
                }
            },
            Err(e) => {
                tracing::warn!("Rate limiter unreachable: {}", e);
                true
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(AppError::RateLimited)
        }
    }
}
