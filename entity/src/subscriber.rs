use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// WhatsApp subscriber registered to receive notifications from one mosque.
///
/// The phone number is stored in canonical international form and is unique
/// per mosque. Status transitions (active / paused / unsubscribed) are driven
/// by the admin dashboard and inbound webhook commands.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subscriber")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mosque_id: i32,
    /// Canonical international phone number, e.g. "+27821234567".
    pub phone: String,
    /// One of "active", "paused", "unsubscribed".
    pub status: String,
    pub notify_announcements: bool,
    pub notify_prayer_reminders: bool,
    pub notify_audio: bool,
    /// Per-subscriber override of the mosque reminder offset, in minutes.
    #[sea_orm(nullable)]
    pub reminder_offset_minutes: Option<i32>,
    /// Web Push subscription endpoint, set when the browser registers.
    #[sea_orm(nullable)]
    pub push_endpoint: Option<String>,
    #[sea_orm(nullable)]
    pub push_p256dh: Option<String>,
    #[sea_orm(nullable)]
    pub push_auth: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
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
