use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::mosque::MosqueInfoDto,
};

/// GET /api/mosque
/// Public mosque info plus today's prayer timetable
pub async fn get_mosque_info() -> Result<MosqueInfoDto, ApiError> {
    let response = send_request(get("/api/mosque")).await?;
    parse_response(response).await
}
