//! Type-safe session management wrapper.
//!
//! All session access for authentication goes through `AuthSession` so the
//! session key and value type live in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_ADMIN_ID: &str = "auth:admin_id";

/// Authentication session management.
///
/// Stores the logged-in admin's database id and handles session lifecycle
/// operations.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Gets the underlying Session reference for use with `AuthGuard`.
    pub fn inner(&self) -> &Session {
        self.session
    }

    /// Stores the admin's id after a successful login.
    ///
    /// # Returns
    /// - `Ok(())` - Admin id stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_admin_id(&self, admin_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_ADMIN_ID, admin_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in admin's id.
    ///
    /// # Returns
    /// - `Ok(Some(admin_id))` - Admin is logged in
    /// - `Ok(None)` - No admin in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_admin_id(&self) -> Result<Option<i32>, AppError> {
        let admin_id = self.session.get::<i32>(SESSION_AUTH_ADMIN_ID).await?;
        Ok(admin_id)
    }

    /// Checks if an admin is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_admin_id().await?.is_some())
    }

    /// Clears all data from the session during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
