//! Mosque factory for creating test mosque tenants.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test mosques with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::mosque::MosqueFactory;
///
/// let mosque = MosqueFactory::new(&db)
///     .name("Masjid an-Nur")
///     .ramadan_mode(true)
///     .build()
///     .await?;
/// ```
pub struct MosqueFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    timezone: String,
    ramadan_mode: bool,
    reminder_offset_minutes: i32,
}

impl<'a> MosqueFactory<'a> {
    /// Creates a new MosqueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Mosque {id}"` where id is auto-incremented
    /// - timezone: `"Africa/Johannesburg"`
    /// - ramadan_mode: `false`
    /// - reminder_offset_minutes: `15`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Mosque {}", id),
            timezone: "Africa/Johannesburg".to_string(),
            ramadan_mode: false,
            reminder_offset_minutes: 15,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    pub fn ramadan_mode(mut self, ramadan_mode: bool) -> Self {
        self.ramadan_mode = ramadan_mode;
        self
    }

    pub fn reminder_offset_minutes(mut self, minutes: i32) -> Self {
        self.reminder_offset_minutes = minutes;
        self
    }

    /// Inserts the mosque into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created mosque entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::mosque::Model, DbErr> {
        entity::mosque::ActiveModel {
            name: ActiveValue::Set(self.name),
            timezone: ActiveValue::Set(self.timezone),
            calculation_method: ActiveValue::Set("muslim_world_league".to_string()),
            madhab: ActiveValue::Set("shafi".to_string()),
            ramadan_mode: ActiveValue::Set(self.ramadan_mode),
            reminder_offset_minutes: ActiveValue::Set(self.reminder_offset_minutes),
            whatsapp_number: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mosque with default values.
pub async fn create_mosque(db: &DatabaseConnection) -> Result<entity::mosque::Model, DbErr> {
    MosqueFactory::new(db).build().await
}
