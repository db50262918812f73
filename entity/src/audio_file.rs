use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Audio recording metadata. The bytes themselves live in external object
/// storage; only the access URL is kept here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "audio_file")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub collection_id: i32,
    pub title: String,
    pub storage_url: String,
    #[sea_orm(nullable)]
    pub duration_seconds: Option<i32>,
    #[sea_orm(nullable)]
    pub size_bytes: Option<i64>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::audio_collection::Entity",
        from = "Column::CollectionId",
        to = "super::audio_collection::Column::Id"
    )]
    AudioCollection,
}

impl Related<super::audio_collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AudioCollection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
