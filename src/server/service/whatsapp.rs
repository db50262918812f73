//! Client for the outbound WhatsApp gateway.
//!
//! Message delivery is delegated to an external gateway; this client posts
//! one text message per recipient and reports failures upward. Like the
//! rate limiter, the handle is built once at startup and shared through
//! `AppState`.

use dioxus_logger::tracing;
use serde::Serialize;

use crate::server::{config::Config, error::AppError};

#[derive(Clone, Debug)]
struct GatewayTarget {
    base_url: String,
    token: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    to: &'a str,
    body: &'a str,
}

/// Handle wrapping the hosted WhatsApp gateway.
///
/// Without gateway configuration sends are logged and dropped, which keeps
/// the dashboard and scheduler usable in development.
#[derive(Clone)]
pub struct WhatsAppClient {
    http: reqwest::Client,
    target: Option<GatewayTarget>,
}

impl WhatsAppClient {
    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        let target = match (&config.whatsapp_api_url, &config.whatsapp_api_token) {
            (Some(url), Some(token)) => Some(GatewayTarget {
                base_url: url.trim_end_matches('/').to_string(),
                token: token.clone(),
            }),
            _ => {
                tracing::warn!("WHATSAPP_API_URL not set, outbound messages will be logged only");
                None
            }
        };

        Self { http, target }
    }

    /// Sends one text message to a canonical phone number.
    ///
    /// # Arguments
    /// - `to` - Recipient in canonical `+27…` form
    /// - `body` - Plain text message body
    ///
    /// # Returns
    /// - `Ok(())` - Gateway accepted the message (or gateway is unconfigured)
    /// - `Err(AppError::ReqwestErr)` - Gateway unreachable or rejected the send
    pub async fn send_text(&self, to: &str, body: &str) -> Result<(), AppError> {
        let Some(target) = &self.target else {
            tracing::info!("WhatsApp gateway disabled, dropping message to {}", to);
            return Ok(());
        };

        self.http
            .post(format!("{}/v1/messages", target.base_url))
            .bearer_auth(&target.token)
            .json(&SendMessageRequest { to, body })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
