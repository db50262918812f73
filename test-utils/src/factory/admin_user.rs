//! Admin user factory for creating test admin accounts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test admin accounts with customizable fields.
///
/// The default password hash is a fixed, well-formed argon2id PHC string so
/// entities insert cleanly; tests exercising real verification should hash
/// their own password and pass it through `password_hash()`.
pub struct AdminUserFactory<'a> {
    db: &'a DatabaseConnection,
    mosque_id: i32,
    email: String,
    password_hash: String,
    name: String,
}

impl<'a> AdminUserFactory<'a> {
    /// Creates a new AdminUserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"admin{id}@example.com"` where id is auto-incremented
    /// - name: `"Admin {id}"`
    /// - password_hash: fixed placeholder PHC string
    pub fn new(db: &'a DatabaseConnection, mosque_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            mosque_id,
            email: format!("admin{}@example.com", id),
            password_hash:
                "$argon2id$v=19$m=19456,t=2,p=1$cGxhY2Vob2xkZXItc2FsdA$vNr1wyAFR9eSVJXkKd9HnMFIRN1pNVSAZgNRGe3zOZE"
                    .to_string(),
            name: format!("Admin {}", id),
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn password_hash(mut self, password_hash: &str) -> Self {
        self.password_hash = password_hash.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Inserts the admin account into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created admin entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin_user::Model, DbErr> {
        entity::admin_user::ActiveModel {
            mosque_id: ActiveValue::Set(self.mosque_id),
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin account with default values.
pub async fn create_admin_user(
    db: &DatabaseConnection,
    mosque_id: i32,
) -> Result<entity::admin_user::Model, DbErr> {
    AdminUserFactory::new(db, mosque_id).build().await
}
