//! Shared plumbing for the API wrappers.
//!
//! Every request carries credentials so the session cookie reaches the
//! server, and every non-2xx response is turned into an [`ApiError`] with
//! the server's error body when one is present.

use crate::{client::model::error::ApiError, model::api::ErrorDto};
use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

fn client_error(context: &str, detail: impl std::fmt::Display) -> ApiError {
    ApiError {
        status: 500,
        message: format!("{}: {}", context, detail),
    }
}

/// Extracts the error message from a failed response.
///
/// Prefers the structured `ErrorDto` body the server sends, falling back to
/// the raw response text.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status() as u64;

    let message = match response.json::<ErrorDto>().await {
        Ok(error_dto) => error_dto.error,
        Err(_) => response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string()),
    };

    ApiError { status, message }
}

/// Parses a JSON success body, or the server's error on a non-2xx status.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| client_error("Failed to parse response", e))
}

/// Like [`parse_response`] for endpoints whose success body is empty.
pub async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }

    Ok(())
}

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// Sends a request, mapping transport failures to an [`ApiError`].
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| client_error("Failed to send request", e))
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| client_error("Failed to serialize request", e))
}
