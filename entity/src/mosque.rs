use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mosque tenant configuration. All subscriber, message, audio, and prayer
/// timetable rows are scoped to one mosque.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mosque")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// IANA timezone name, e.g. "Africa/Johannesburg".
    pub timezone: String,
    /// Prayer time calculation method identifier, e.g. "muslim_world_league".
    pub calculation_method: String,
    /// Asr madhab, "shafi" or "hanafi".
    pub madhab: String,
    pub ramadan_mode: bool,
    /// Default minutes before a prayer to send reminders.
    pub reminder_offset_minutes: i32,
    /// Sender number registered with the WhatsApp gateway, canonical form.
    #[sea_orm(nullable)]
    pub whatsapp_number: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admin_user::Entity")]
    AdminUser,
    #[sea_orm(has_many = "super::subscriber::Entity")]
    Subscriber,
    #[sea_orm(has_many = "super::message::Entity")]
    Message,
    #[sea_orm(has_many = "super::audio_collection::Entity")]
    AudioCollection,
    #[sea_orm(has_many = "super::prayer_time::Entity")]
    PrayerTime,
}

impl Related<super::admin_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminUser.def()
    }
}

impl Related<super::subscriber::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subscriber.def()
    }
}

impl Related<super::message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Message.def()
    }
}

impl Related<super::audio_collection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AudioCollection.def()
    }
}

impl Related<super::prayer_time::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrayerTime.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
