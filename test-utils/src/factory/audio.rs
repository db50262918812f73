//! Audio factory for creating test collections and files.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test audio collections with customizable fields.
pub struct AudioCollectionFactory<'a> {
    db: &'a DatabaseConnection,
    mosque_id: i32,
    title: String,
    description: Option<String>,
}

impl<'a> AudioCollectionFactory<'a> {
    /// Creates a new AudioCollectionFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Collection {id}"` where id is auto-incremented
    /// - description: `None`
    pub fn new(db: &'a DatabaseConnection, mosque_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            mosque_id,
            title: format!("Collection {}", id),
            description: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Inserts the collection into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created collection entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::audio_collection::Model, DbErr> {
        entity::audio_collection::ActiveModel {
            mosque_id: ActiveValue::Set(self.mosque_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an audio collection with default values.
pub async fn create_collection(
    db: &DatabaseConnection,
    mosque_id: i32,
) -> Result<entity::audio_collection::Model, DbErr> {
    AudioCollectionFactory::new(db, mosque_id).build().await
}

/// Creates an audio file in a collection with default values.
pub async fn create_audio_file(
    db: &DatabaseConnection,
    collection_id: i32,
) -> Result<entity::audio_file::Model, DbErr> {
    let id = next_id();

    entity::audio_file::ActiveModel {
        collection_id: ActiveValue::Set(collection_id),
        title: ActiveValue::Set(format!("Recording {}", id)),
        storage_url: ActiveValue::Set(format!("https://storage.example.com/audio/{}.mp3", id)),
        duration_seconds: ActiveValue::Set(Some(1800)),
        size_bytes: ActiveValue::Set(Some(14_400_000)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
