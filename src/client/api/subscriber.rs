use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::error::ApiError,
    },
    model::subscriber::{
        ImportRequestDto, ImportResultDto, ImportSubscriberDto, PaginatedSubscribersDto,
        SubscribeRequestDto, SubscriberDto, UpdateSubscriberDto,
    },
};

/// GET /api/admin/subscribers
/// Get paginated subscribers for the dashboard table
pub async fn get_subscribers(page: u64, entries: u64) -> Result<PaginatedSubscribersDto, ApiError> {
    let url = format!("/api/admin/subscribers?page={}&entries={}", page, entries);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// POST /api/admin/subscribers
/// Add a single subscriber from the dashboard
pub async fn create_subscriber(dto: SubscribeRequestDto) -> Result<SubscriberDto, ApiError> {
    let body = serialize_json(&dto)?;
    let response = send_request(post("/api/admin/subscribers").body(body)).await?;
    parse_response(response).await
}

/// PUT /api/admin/subscribers/{id}
/// Update a subscriber's status and preferences
pub async fn update_subscriber(id: i32, dto: UpdateSubscriberDto) -> Result<SubscriberDto, ApiError> {
    let url = format!("/api/admin/subscribers/{}", id);
    let body = serialize_json(&dto)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

/// DELETE /api/admin/subscribers/{id}
/// Remove a subscriber
pub async fn delete_subscriber(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/subscribers/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// POST /api/admin/subscribers/import
/// Bulk import phone numbers
pub async fn import_subscribers(
    subscribers: Vec<ImportSubscriberDto>,
) -> Result<ImportResultDto, ApiError> {
    let body = serialize_json(&ImportRequestDto { subscribers })?;
    let response = send_request(post("/api/admin/subscribers/import").body(body)).await?;
    parse_response(response).await
}
