//! Admin audio content endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::OkDto,
        audio::{CreateAudioFileDto, CreateCollectionDto, UploadUrlRequestDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::audio::{CreateAudioFileParam, CreateCollectionParam},
        service::audio::AudioService,
        state::AppState,
    },
};

/// Get all audio collections with their file counts.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Collections, newest first
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn get_collections(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    let collections = audio_service.get_collections(context.mosque.id).await?;

    let dtos: Vec<_> = collections.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create an audio collection.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `201 Created` - The created collection
/// - `400 Bad Request` - Empty title
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
pub async fn create_collection(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCollectionDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    let collection = audio_service
        .create_collection(CreateCollectionParam {
            mosque_id: context.mosque.id,
            title: payload.title,
            description: payload.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(collection.into_dto())))
}

/// Delete a collection and its file metadata.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Collection deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such collection
/// - `500 Internal Server Error` - Database error
pub async fn delete_collection(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    audio_service
        .delete_collection(context.mosque.id, id)
        .await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}

/// Get all files in a collection.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Files, newest first
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such collection
/// - `500 Internal Server Error` - Database error
pub async fn get_files(
    State(state): State<AppState>,
    session: Session,
    Path(collection_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    let files = audio_service
        .get_files(context.mosque.id, collection_id)
        .await?;

    let dtos: Vec<_> = files.into_iter().map(|f| f.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Request a signed direct-upload URL for a new file.
///
/// The browser uploads the bytes straight to object storage; this endpoint
/// only brokers the signed URL.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - Signed upload URL plus the future public URL
/// - `400 Bad Request` - Storage signer not configured
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such collection
/// - `500 Internal Server Error` - Signer unreachable
pub async fn create_upload_url(
    State(state): State<AppState>,
    session: Session,
    Path(collection_id): Path<i32>,
    Json(payload): Json<UploadUrlRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    let upload_url = audio_service
        .create_upload_url(
            &state.storage,
            context.mosque.id,
            collection_id,
            &payload.file_name,
            &payload.content_type,
        )
        .await?;

    Ok((StatusCode::OK, Json(upload_url)))
}

/// Register an uploaded file's metadata.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `201 Created` - The registered file
/// - `400 Bad Request` - Missing title or storage URL
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such collection
/// - `500 Internal Server Error` - Database error
pub async fn create_file(
    State(state): State<AppState>,
    session: Session,
    Path(collection_id): Path<i32>,
    Json(payload): Json<CreateAudioFileDto>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    let file = audio_service
        .create_file(
            context.mosque.id,
            CreateAudioFileParam {
                collection_id,
                title: payload.title,
                storage_url: payload.storage_url,
                duration_seconds: payload.duration_seconds,
                size_bytes: payload.size_bytes,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(file.into_dto())))
}

/// Delete a file's metadata row.
///
/// # Access Control
/// - Admin session required
///
/// # Returns
/// - `200 OK` - File deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No such collection or file
/// - `500 Internal Server Error` - Database error
pub async fn delete_file(
    State(state): State<AppState>,
    session: Session,
    Path((collection_id, id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let context = AuthGuard::new(&state.db, &session).require().await?;

    let audio_service = AudioService::new(&state.db);
    audio_service
        .delete_file(context.mosque.id, collection_id, id)
        .await?;

    Ok((StatusCode::OK, Json(OkDto::new())))
}
