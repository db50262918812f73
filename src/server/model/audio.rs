//! Audio collection and file domain models.

use crate::model::audio::{AudioCollectionDto, AudioFileDto};

/// Audio collection with its file count.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioCollection {
    pub id: i32,
    pub mosque_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub file_count: u64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AudioCollection {
    /// Builds the domain model from an entity plus the file count the
    /// repository fetched alongside it.
    pub fn from_entity(entity: entity::audio_collection::Model, file_count: u64) -> Self {
        Self {
            id: entity.id,
            mosque_id: entity.mosque_id,
            title: entity.title,
            description: entity.description,
            file_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AudioCollectionDto {
        AudioCollectionDto {
            id: self.id,
            title: self.title,
            description: self.description,
            file_count: self.file_count,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Audio file metadata pointing at external object storage.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioFile {
    pub id: i32,
    pub collection_id: i32,
    pub title: String,
    pub storage_url: String,
    pub duration_seconds: Option<i32>,
    pub size_bytes: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl AudioFile {
    pub fn from_entity(entity: entity::audio_file::Model) -> Self {
        Self {
            id: entity.id,
            collection_id: entity.collection_id,
            title: entity.title,
            storage_url: entity.storage_url,
            duration_seconds: entity.duration_seconds,
            size_bytes: entity.size_bytes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AudioFileDto {
        AudioFileDto {
            id: self.id,
            collection_id: self.collection_id,
            title: self.title,
            storage_url: self.storage_url,
            duration_seconds: self.duration_seconds,
            size_bytes: self.size_bytes,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Parameters for creating a collection.
#[derive(Debug, Clone)]
pub struct CreateCollectionParam {
    pub mosque_id: i32,
    pub title: String,
    pub description: Option<String>,
}

/// Parameters for registering an uploaded audio file.
#[derive(Debug, Clone)]
pub struct CreateAudioFileParam {
    pub collection_id: i32,
    pub title: String,
    pub storage_url: String,
    pub duration_seconds: Option<i32>,
    pub size_bytes: Option<i64>,
}
