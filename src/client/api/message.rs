use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::message::{CreateMessageDto, MessageDto, PaginatedMessagesDto, UpdateMessageDto},
};

/// GET /api/admin/messages
/// Get paginated messages for the dashboard table
pub async fn get_messages(page: u64, entries: u64) -> Result<PaginatedMessagesDto, ApiError> {
    let url = format!("/api/admin/messages?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// POST /api/admin/messages
/// Create a draft or scheduled message
pub async fn create_message(dto: CreateMessageDto) -> Result<MessageDto, ApiError> {
    let body = serialize_json(&dto)?;
    let response = send_request(post("/api/admin/messages").body(body)).await?;
    parse_response(response).await
}

/// PUT /api/admin/messages/{id}
/// Edit an unsent message
pub async fn update_message(id: i32, dto: UpdateMessageDto) -> Result<MessageDto, ApiError> {
    let url = format!("/api/admin/messages/{}", id);
    let body = serialize_json(&dto)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// DELETE /api/admin/messages/{id}
/// Delete a message
pub async fn delete_message(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/messages/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// POST /api/admin/messages/{id}/send
/// Send a message to its recipients immediately
pub async fn send_message(id: i32) -> Result<MessageDto, ApiError> {
    let url = format!("/api/admin/messages/{}/send", id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
