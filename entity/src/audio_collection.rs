use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named grouping of audio recordings (lecture series, Quran recitations).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audio_collection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mosque_id: i32,
    pub title: String,
    #[sea_orm(nullable)]
    pub description: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::mosque::Entity",
        from = "Column::MosqueId",
        to = "super::mosque::Column::Id"
    )]
    Mosque,
    #[sea_orm(has_many = "super::audio_file::Entity")]
    AudioFile,
}

impl Related<super::mosque::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mosque.def()
    }
}

impl Related<super::audio_file::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AudioFile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
