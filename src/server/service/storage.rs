//! Client for the hosted object-storage signer.
//!
//! Audio bytes never pass through this application. The dashboard asks the
//! storage service for a time-limited signed URL, the browser uploads
//! directly to storage, and only the resulting public URL is recorded in
//! the database.

use serde::{Deserialize, Serialize};

use crate::{
    model::audio::UploadUrlDto,
    server::{config::Config, error::AppError},
};

#[derive(Clone, Debug)]
struct SignerTarget {
    base_url: String,
    token: String,
}

#[derive(Serialize)]
struct SignRequest<'a> {
    key: &'a str,
    content_type: &'a str,
}

#[derive(Deserialize)]
struct SignResponse {
    upload_url: String,
    public_url: String,
}

/// Handle wrapping the hosted storage signer service.
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    target: Option<SignerTarget>,
}

impl StorageClient {
    pub fn from_config(http: reqwest::Client, config: &Config) -> Self {
        let target = match (&config.storage_api_url, &config.storage_api_token) {
            (Some(url), Some(token)) => Some(SignerTarget {
                base_url: url.trim_end_matches('/').to_string(),
                token: token.clone(),
            }),
            _ => None,
        };

        Self { http, target }
    }

    /// Requests a signed direct-upload URL for an audio file.
    ///
    /// The object key gets a random prefix so repeated uploads of the same
    /// file name never collide.
    ///
    /// # Arguments
    /// - `file_name` - Original file name from the upload form
    /// - `content_type` - MIME type the browser will upload with
    ///
    /// # Returns
    /// - `Ok(UploadUrlDto)` - Signed upload URL plus the future public URL
    /// - `Err(AppError::BadRequest)` - Storage signer not configured
    /// - `Err(AppError::ReqwestErr)` - Signer unreachable or rejected the request
    pub async fn create_upload_url(
        &self,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadUrlDto, AppError> {
        let Some(target) = &self.target else {
            return Err(AppError::BadRequest(
                "File uploads are not configured for this deployment.".to_string(),
            ));
        };

        let sanitized: String = file_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let key = format!("audio/{:016x}-{}", rand::random::<u64>(), sanitized);

        let response = self
            .http
            .post(format!("{}/v1/sign", target.base_url))
            .bearer_auth(&target.token)
            .json(&SignRequest {
                key: &key,
                content_type,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<SignResponse>()
            .await?;

        Ok(UploadUrlDto {
            upload_url: response.upload_url,
            public_url: response.public_url,
        })
    }
}
