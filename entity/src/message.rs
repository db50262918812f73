use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Announcement or scheduled message authored from the admin dashboard.
///
/// Messages start as drafts, optionally carry a `scheduled_at` timestamp for
/// the dispatch scheduler, and record delivery outcome (`recipient_count`,
/// `sent_at`) once sent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mosque_id: i32,
    pub title: String,
    /// Markdown body rendered on the dashboard and sent as plain text.
    pub body: String,
    /// Notification category, e.g. "announcement" or "audio".
    pub category: String,
    /// One of "draft", "scheduled", "sent", "failed".
    pub status: String,
    #[sea_orm(nullable)]
    pub scheduled_at: Option<ChronoDateTimeUtc>,
    pub recipient_count: i32,
    #[sea_orm(nullable)]
    pub sent_at: Option<ChronoDateTimeUtc>,
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
}

impl Related<super::mosque::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mosque.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
