//! Admin account domain model.

use crate::model::admin::AdminUserDto;

/// Dashboard administrator with their argon2 credential hash.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: i32,
    pub mosque_id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

impl AdminUser {
    pub fn from_entity(entity: entity::admin_user::Model) -> Self {
        Self {
            id: entity.id,
            mosque_id: entity.mosque_id,
            email: entity.email,
            password_hash: entity.password_hash,
            name: entity.name,
        }
    }

    /// Converts to the API DTO. The password hash never leaves the server,
    /// so the mosque name has to be supplied by the caller.
    pub fn into_dto(self, mosque_name: String) -> AdminUserDto {
        AdminUserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            mosque_id: self.mosque_id,
            mosque_name,
        }
    }
}

/// Parameters for creating an admin account (first-run seeding).
#[derive(Debug, Clone)]
pub struct CreateAdminUserParam {
    pub mosque_id: i32,
    pub email: String,
    pub password_hash: String,
    pub name: String,
}
