use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::admin::{AdminUserDto, LoginRequestDto},
};

/// POST /api/auth/login
/// Authenticate with email and password
pub async fn login(email: String, password: String) -> Result<(), ApiError> {
    let body = serialize_json(&LoginRequestDto { email, password })?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_empty_response(response).await
}

/// GET /api/auth/logout
/// End the current admin session
pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(get("/api/auth/logout")).await?;
    parse_empty_response(response).await
}

/// GET /api/auth/user
/// Get the currently authenticated admin, or None without a session
pub async fn get_user() -> Result<Option<AdminUserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}
