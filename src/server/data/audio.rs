//! Audio collection and file data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::audio::{
    AudioCollection, AudioFile, CreateAudioFileParam, CreateCollectionParam,
};

/// Repository providing database operations for audio content metadata.
pub struct AudioRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AudioRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an audio collection.
    pub async fn create_collection(
        &self,
        param: CreateCollectionParam,
    ) -> Result<AudioCollection, DbErr> {
        let entity = entity::audio_collection::ActiveModel {
            mosque_id: ActiveValue::Set(param.mosque_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AudioCollection::from_entity(entity, 0))
    }

    /// Retrieves all collections for a mosque with their file counts,
    /// newest first.
    pub async fn get_collections(&self, mosque_id: i32) -> Result<Vec<AudioCollection>, DbErr> {
        let entities = entity::prelude::AudioCollection::find()
            .filter(entity::audio_collection::Column::MosqueId.eq(mosque_id))
            .order_by_desc(entity::audio_collection::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut collections = Vec::with_capacity(entities.len());
        for entity in entities {
            let file_count = entity::prelude::AudioFile::find()
                .filter(entity::audio_file::Column::CollectionId.eq(entity.id))
                .count(self.db)
                .await?;
            collections.push(AudioCollection::from_entity(entity, file_count));
        }

        Ok(collections)
    }

    /// Finds a collection by id within a mosque.
    pub async fn find_collection(
        &self,
        mosque_id: i32,
        id: i32,
    ) -> Result<Option<AudioCollection>, DbErr> {
        let Some(entity) = entity::prelude::AudioCollection::find_by_id(id)
            .filter(entity::audio_collection::Column::MosqueId.eq(mosque_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let file_count = entity::prelude::AudioFile::find()
            .filter(entity::audio_file::Column::CollectionId.eq(entity.id))
            .count(self.db)
            .await?;

        Ok(Some(AudioCollection::from_entity(entity, file_count)))
    }

    /// Deletes a collection and its files (cascade).
    ///
    /// # Returns
    /// - `Ok(true)` - Collection deleted
    /// - `Ok(false)` - No such collection in this mosque
    pub async fn delete_collection(&self, mosque_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AudioCollection::delete_many()
            .filter(entity::audio_collection::Column::Id.eq(id))
            .filter(entity::audio_collection::Column::MosqueId.eq(mosque_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Registers an uploaded file's metadata in a collection.
    pub async fn create_file(&self, param: CreateAudioFileParam) -> Result<AudioFile, DbErr> {
        let entity = entity::audio_file::ActiveModel {
            collection_id: ActiveValue::Set(param.collection_id),
            title: ActiveValue::Set(param.title),
            storage_url: ActiveValue::Set(param.storage_url),
            duration_seconds: ActiveValue::Set(param.duration_seconds),
            size_bytes: ActiveValue::Set(param.size_bytes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AudioFile::from_entity(entity))
    }

    /// Retrieves all files in a collection, newest first.
    pub async fn get_files(&self, collection_id: i32) -> Result<Vec<AudioFile>, DbErr> {
        let entities = entity::prelude::AudioFile::find()
            .filter(entity::audio_file::Column::CollectionId.eq(collection_id))
            .order_by_desc(entity::audio_file::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(AudioFile::from_entity).collect())
    }

    /// Deletes a file's metadata row.
    ///
    /// # Returns
    /// - `Ok(true)` - File deleted
    /// - `Ok(false)` - No such file in this collection
    pub async fn delete_file(&self, collection_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::AudioFile::delete_many()
            .filter(entity::audio_file::Column::Id.eq(id))
            .filter(entity::audio_file::Column::CollectionId.eq(collection_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
