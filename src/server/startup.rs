use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::{admin_user::AdminUserRepository, mosque::MosqueRepository},
    error::AppError,
    model::admin_user::CreateAdminUserParam,
    service::auth::AuthService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in a dedicated table in the same SQLite file as the
/// application data and expire after a week of inactivity.
///
/// # Arguments
/// - `db` - Connected application database
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to attach to the router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Builds the shared HTTP client for external service calls.
///
/// Redirects are disabled; every hosted service this application talks to
/// answers at a fixed URL.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_default()
}

/// Seeds the mosque and first admin account on an empty database.
///
/// First-run deployments configure `MOSQUE_NAME`, `ADMIN_EMAIL`, and
/// `ADMIN_PASSWORD`; once a mosque row exists this is a no-op, so the seed
/// credentials can stay in the environment.
///
/// # Arguments
/// - `db` - Connected application database
/// - `config` - Seed configuration from the environment
///
/// # Returns
/// - `Ok(())` - Database already seeded, or seeding succeeded
/// - `Err(AppError)` - Hashing or database error during seeding
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let mosque_repo = MosqueRepository::new(db);

    if mosque_repo.exists().await? {
        return Ok(());
    }

    tracing::info!("Empty database, seeding mosque and admin account");

    let mosque = mosque_repo.create(config.mosque_name.clone()).await?;

    let password_hash = AuthService::hash_password(&config.admin_password)?;

    let admin_repo = AdminUserRepository::new(db);
    admin_repo
        .create(CreateAdminUserParam {
            mosque_id: mosque.id,
            email: config.admin_email.clone(),
            password_hash,
            name: "Administrator".to_string(),
        })
        .await?;

    tracing::info!("Seeded mosque \"{}\" with admin {}", mosque.name, config.admin_email);

    Ok(())
}
