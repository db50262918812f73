//! Authentication guard for admin-only endpoints.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{admin_user::AdminUserRepository, mosque::MosqueRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::{admin_user::AdminUser, mosque::Mosque},
};

/// The authenticated admin and the mosque they administer, resolved once
/// per request by [`AuthGuard::require`].
#[derive(Debug)]
pub struct AdminContext {
    pub admin: AdminUser,
    pub mosque: Mosque,
}

/// Guard that resolves the session into an admin account.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a logged-in admin, returning them with their mosque.
    ///
    /// # Returns
    /// - `Ok(AdminContext)` - Session holds a valid admin
    /// - `Err(AppError::AuthErr(AdminNotInSession))` - Not logged in
    /// - `Err(AppError::AuthErr(AdminNotInDatabase))` - Session references a
    ///   deleted account
    pub async fn require(&self) -> Result<AdminContext, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(admin_id) = auth_session.get_admin_id().await? else {
            return Err(AuthError::AdminNotInSession.into());
        };

        let admin_repo = AdminUserRepository::new(self.db);
        let Some(admin) = admin_repo.find_by_id(admin_id).await? else {
            return Err(AuthError::AdminNotInDatabase(admin_id).into());
        };

        let mosque_repo = MosqueRepository::new(self.db);
        let Some(mosque) = mosque_repo.find_by_id(admin.mosque_id).await? else {
            return Err(AppError::NotFound("Mosque not configured".to_string()));
        };

        Ok(AdminContext { admin, mosque })
    }
}
