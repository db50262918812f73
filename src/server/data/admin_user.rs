//! Admin account data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::admin_user::{AdminUser, CreateAdminUserParam};

/// Repository providing database operations for admin accounts.
pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an admin account.
    ///
    /// # Arguments
    /// - `param` - Mosque id, email, pre-hashed password, display name
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - The created account
    /// - `Err(DbErr)` - Database error, including unique email violations
    pub async fn create(&self, param: CreateAdminUserParam) -> Result<AdminUser, DbErr> {
        let entity = entity::admin_user::ActiveModel {
            mosque_id: ActiveValue::Set(param.mosque_id),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AdminUser::from_entity(entity))
    }

    /// Finds an admin account by id (session resolution).
    pub async fn find_by_id(&self, id: i32) -> Result<Option<AdminUser>, DbErr> {
        let entity = entity::prelude::AdminUser::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(AdminUser::from_entity))
    }

    /// Finds an admin account by login email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AdminUser>, DbErr> {
        let entity = entity::prelude::AdminUser::find()
            .filter(entity::admin_user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(AdminUser::from_entity))
    }

    /// Checks if any admin account exists.
    ///
    /// Used during first-time setup to decide whether to seed the initial
    /// admin from environment configuration.
    pub async fn any_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::AdminUser::find().count(self.db).await?;

        Ok(count > 0)
    }
}
