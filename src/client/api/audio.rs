use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::audio::{
        AudioCollectionDto, AudioFileDto, CreateAudioFileDto, CreateCollectionDto, UploadUrlDto,
        UploadUrlRequestDto,
    },
};

/// GET /api/admin/audio/collections
/// List audio collections with file counts
pub async fn get_collections() -> Result<Vec<AudioCollectionDto>, ApiError> {
    let response = send_request(get("/api/admin/audio/collections")).await?;
    parse_response(response).await
}

/// POST /api/admin/audio/collections
/// Create a collection
pub async fn create_collection(dto: CreateCollectionDto) -> Result<AudioCollectionDto, ApiError> {
    let body = serialize_json(&dto)?;
    let response = send_request(post("/api/admin/audio/collections").body(body)).await?;
    parse_response(response).await
}

/// DELETE /api/admin/audio/collections/{id}
/// Delete a collection and its file records
pub async fn delete_collection(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/audio/collections/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

/// GET /api/admin/audio/collections/{id}/files
/// List the files in a collection
pub async fn get_files(collection_id: i32) -> Result<Vec<AudioFileDto>, ApiError> {
    let url = format!("/api/admin/audio/collections/{}/files", collection_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// POST /api/admin/audio/collections/{id}/upload-url
/// Request a signed direct-upload URL for a new file
pub async fn create_upload_url(
    collection_id: i32,
    dto: UploadUrlRequestDto,
) -> Result<UploadUrlDto, ApiError> {
    let url = format!("/api/admin/audio/collections/{}/upload-url", collection_id);
    let body = serialize_json(&dto)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// POST /api/admin/audio/collections/{id}/files
/// Register an uploaded file's metadata
pub async fn create_file(
    collection_id: i32,
    dto: CreateAudioFileDto,
) -> Result<AudioFileDto, ApiError> {
    let url = format!("/api/admin/audio/collections/{}/files", collection_id);
    let body = serialize_json(&dto)?;
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

/// DELETE /api/admin/audio/collections/{collection_id}/files/{id}
/// Delete a file record
pub async fn delete_file(collection_id: i32, id: i32) -> Result<(), ApiError> {
    let url = format!(
        "/api/admin/audio/collections/{}/files/{}",
        collection_id, id
    );
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
