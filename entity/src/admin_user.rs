use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Dashboard administrator account, tied to a single mosque.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub mosque_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// PHC-format argon2id hash, never the plaintext password.
    pub password_hash: String,
    pub name: String,
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
