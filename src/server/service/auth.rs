//! Credential authentication for the admin dashboard.
//!
//! Passwords are stored as argon2id PHC hashes. Login failures do not
//! distinguish between an unknown email and a wrong password.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::admin_user::AdminUserRepository,
    error::{auth::AuthError, AppError},
    model::admin_user::AdminUser,
};

/// Service providing credential verification and password hashing.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies an email/password pair against the admin accounts.
    ///
    /// # Arguments
    /// - `email` - Login email
    /// - `password` - Plaintext password from the login form
    ///
    /// # Returns
    /// - `Ok(AdminUser)` - Credentials valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, email: &str, password: &str) -> Result<AdminUser, AppError> {
        let admin_repo = AdminUserRepository::new(self.db);

        let Some(admin) = admin_repo.find_by_email(email).await? else {
            // Burn a verification anyway so response timing does not reveal
            // whether the email exists.
            let _ = Self::verify_password(DUMMY_HASH, password);
            return Err(AuthError::InvalidCredentials.into());
        };

        if !Self::verify_password(&admin.password_hash, password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(admin)
    }

    /// Hashes a plaintext password into PHC string form for storage.
    ///
    /// # Returns
    /// - `Ok(String)` - argon2id hash with a fresh random salt
    /// - `Err(AppError::InternalError)` - Hashing failed
    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

        Ok(hash.to_string())
    }

    fn verify_password(hash: &str, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

/// Hash of an unguessable value, verified against when the email is unknown.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$Zm9yLXRpbWluZy1vbmx5$CS/zRNhV8ixmuuPd3BiEVf2m9m65QiJ9LF1nf2mDjVI";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = AuthService::hash_password("correct horse").unwrap();
        assert!(AuthService::verify_password(&hash, "correct horse"));
        assert!(!AuthService::verify_password(&hash, "wrong horse"));
    }

    #[test]
    fn verify_rejects_malformed_hash() {
        assert!(!AuthService::verify_password("not-a-phc-string", "anything"));
    }
}
