use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One day of the mosque prayer timetable. Unique per (mosque_id, date).
///
/// Times are stored as "HH:MM" strings in the mosque's local timezone, the
/// same form they are entered and displayed in.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prayer_time")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mosque_id: i32,
    pub date: ChronoDate,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    #[sea_orm(nullable)]
    pub jumuah: Option<String>,
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
