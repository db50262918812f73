//! Mosque data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::mosque::{Mosque, UpdateMosqueParam};

/// Repository providing database operations for the mosque tenant.
pub struct MosqueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MosqueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the mosque row during first-run seeding.
    ///
    /// # Arguments
    /// - `name` - Display name from the seed configuration
    ///
    /// # Returns
    /// - `Ok(Mosque)` - The created mosque with default configuration
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, name: String) -> Result<Mosque, DbErr> {
        let entity = entity::mosque::ActiveModel {
            name: ActiveValue::Set(name),
            timezone: ActiveValue::Set("Africa/Johannesburg".to_string()),
            calculation_method: ActiveValue::Set("muslim_world_league".to_string()),
            madhab: ActiveValue::Set("shafi".to_string()),
            ramadan_mode: ActiveValue::Set(false),
            reminder_offset_minutes: ActiveValue::Set(15),
            whatsapp_number: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Mosque::from_entity(entity))
    }

    /// Finds the deployment's mosque (lowest id).
    ///
    /// The application serves a single mosque per deployment; all public
    /// endpoints resolve the tenant through this query.
    ///
    /// # Returns
    /// - `Ok(Some(Mosque))` - Mosque found
    /// - `Ok(None)` - Database has not been seeded yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_default(&self) -> Result<Option<Mosque>, DbErr> {
        let entity = entity::prelude::Mosque::find()
            .order_by_asc(entity::mosque::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Mosque::from_entity))
    }

    /// Finds a mosque by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Mosque>, DbErr> {
        let entity = entity::prelude::Mosque::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Mosque::from_entity))
    }

    /// Checks whether any mosque exists (first-run detection).
    pub async fn exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Mosque::find().count(self.db).await?;

        Ok(count > 0)
    }

    /// Updates mosque configuration from the admin settings page.
    ///
    /// # Arguments
    /// - `id` - Mosque id
    /// - `param` - Full replacement of the editable configuration fields
    ///
    /// # Returns
    /// - `Ok(Some(Mosque))` - Updated mosque
    /// - `Ok(None)` - No mosque with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateMosqueParam,
    ) -> Result<Option<Mosque>, DbErr> {
        let Some(existing) = entity::prelude::Mosque::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut model: entity::mosque::ActiveModel = existing.into();
        model.name = ActiveValue::Set(param.name);
        model.timezone = ActiveValue::Set(param.timezone);
        model.calculation_method = ActiveValue::Set(param.calculation_method);
        model.madhab = ActiveValue::Set(param.madhab);
        model.ramadan_mode = ActiveValue::Set(param.ramadan_mode);
        model.reminder_offset_minutes = ActiveValue::Set(param.reminder_offset_minutes);
        model.whatsapp_number = ActiveValue::Set(param.whatsapp_number);

        let entity = model.update(self.db).await?;

        Ok(Some(Mosque::from_entity(entity)))
    }
}
