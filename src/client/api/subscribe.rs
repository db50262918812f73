use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::subscriber::{SubscribeRequestDto, SubscriberDto},
};

/// POST /api/subscribe
/// Sign a phone number up from the public landing page
pub async fn subscribe(dto: SubscribeRequestDto) -> Result<SubscriberDto, ApiError> {
    let body = serialize_json(&dto)?;
    let response = send_request(post("/api/subscribe").body(body)).await?;
    parse_response(response).await
}
