use serde::{Deserialize, Serialize};

/// Audio collection with its file count for the dashboard listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioCollectionDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_count: u64,
    pub created_at: String,
}

/// Audio file metadata; bytes live in external object storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioFileDto {
    pub id: i32,
    pub collection_id: i32,
    pub title: String,
    pub storage_url: String,
    pub duration_seconds: Option<i32>,
    pub size_bytes: Option<i64>,
    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateCollectionDto {
    pub title: String,
    pub description: Option<String>,
}

/// Registers an uploaded file's metadata after the browser finished the
/// direct-to-storage upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateAudioFileDto {
    pub title: String,
    pub storage_url: String,
    pub duration_seconds: Option<i32>,
    pub size_bytes: Option<i64>,
}

/// Request for a signed direct-upload URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadUrlRequestDto {
    pub file_name: String,
    pub content_type: String,
}

/// Time-limited signed URL pair returned by the storage signer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadUrlDto {
    /// URL the browser PUTs the file bytes to.
    pub upload_url: String,
    /// Public URL the file will be readable from afterwards.
    pub public_url: String,
}
