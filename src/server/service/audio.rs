//! Audio content business logic: collections, file metadata, and signed
//! upload URLs.

use sea_orm::DatabaseConnection;

use crate::{
    model::audio::UploadUrlDto,
    server::{
        data::audio::AudioRepository,
        error::AppError,
        model::audio::{
            AudioCollection, AudioFile, CreateAudioFileParam, CreateCollectionParam,
        },
        service::storage::StorageClient,
    },
};

/// Service providing business logic for audio content management.
pub struct AudioService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AudioService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an audio collection.
    ///
    /// # Returns
    /// - `Ok(AudioCollection)` - The created collection
    /// - `Err(AppError::BadRequest)` - Empty title
    pub async fn create_collection(
        &self,
        param: CreateCollectionParam,
    ) -> Result<AudioCollection, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("Title is required.".to_string()));
        }

        let audio_repo = AudioRepository::new(self.db);
        let collection = audio_repo.create_collection(param).await?;

        Ok(collection)
    }

    /// Retrieves all collections for a mosque with their file counts.
    pub async fn get_collections(&self, mosque_id: i32) -> Result<Vec<AudioCollection>, AppError> {
        let audio_repo = AudioRepository::new(self.db);
        let collections = audio_repo.get_collections(mosque_id).await?;

        Ok(collections)
    }

    /// Deletes a collection and its file metadata.
    ///
    /// Storage objects are left behind; the signer service owns their
    /// lifecycle.
    ///
    /// # Returns
    /// - `Ok(())` - Collection deleted
    /// - `Err(AppError::NotFound)` - No such collection in this mosque
    pub async fn delete_collection(&self, mosque_id: i32, id: i32) -> Result<(), AppError> {
        let audio_repo = AudioRepository::new(self.db);

        if !audio_repo.delete_collection(mosque_id, id).await? {
            return Err(AppError::NotFound("Collection not found".to_string()));
        }

        Ok(())
    }

    /// Requests a signed direct-upload URL for a new audio file.
    ///
    /// # Returns
    /// - `Ok(UploadUrlDto)` - Signed upload URL plus the future public URL
    /// - `Err(AppError::NotFound)` - No such collection in this mosque
    /// - `Err(AppError::BadRequest)` - Storage signer not configured
    pub async fn create_upload_url(
        &self,
        storage: &StorageClient,
        mosque_id: i32,
        collection_id: i32,
        file_name: &str,
        content_type: &str,
    ) -> Result<UploadUrlDto, AppError> {
        let audio_repo = AudioRepository::new(self.db);

        if audio_repo
            .find_collection(mosque_id, collection_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Collection not found".to_string()));
        }

        storage.create_upload_url(file_name, content_type).await
    }

    /// Registers an uploaded file's metadata in a collection.
    ///
    /// Called after the browser finishes its direct upload to storage.
    ///
    /// # Returns
    /// - `Ok(AudioFile)` - The registered file
    /// - `Err(AppError::NotFound)` - No such collection in this mosque
    /// - `Err(AppError::BadRequest)` - Empty title or storage URL
    pub async fn create_file(
        &self,
        mosque_id: i32,
        param: CreateAudioFileParam,
    ) -> Result<AudioFile, AppError> {
        if param.title.trim().is_empty() || param.storage_url.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Title and storage URL are required.".to_string(),
            ));
        }

        let audio_repo = AudioRepository::new(self.db);

        if audio_repo
            .find_collection(mosque_id, param.collection_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Collection not found".to_string()));
        }

        let file = audio_repo.create_file(param).await?;

        Ok(file)
    }

    /// Retrieves all files in a collection.
    ///
    /// # Returns
    /// - `Ok(Vec<AudioFile>)` - Files, newest first
    /// - `Err(AppError::NotFound)` - No such collection in this mosque
    pub async fn get_files(
        &self,
        mosque_id: i32,
        collection_id: i32,
    ) -> Result<Vec<AudioFile>, AppError> {
        let audio_repo = AudioRepository::new(self.db);

        if audio_repo
            .find_collection(mosque_id, collection_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Collection not found".to_string()));
        }

        let files = audio_repo.get_files(collection_id).await?;

        Ok(files)
    }

    /// Deletes a file's metadata row.
    ///
    /// # Returns
    /// - `Ok(())` - File deleted
    /// - `Err(AppError::NotFound)` - No such collection or file
    pub async fn delete_file(
        &self,
        mosque_id: i32,
        collection_id: i32,
        id: i32,
    ) -> Result<(), AppError> {
        let audio_repo = AudioRepository::new(self.db);

        if audio_repo
            .find_collection(mosque_id, collection_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Collection not found".to_string()));
        }

        if !audio_repo.delete_file(collection_id, id).await? {
            return Err(AppError::NotFound("File not found".to_string()));
        }

        Ok(())
    }
}
