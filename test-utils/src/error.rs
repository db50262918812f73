//! Error type for test environment setup.

use thiserror::Error;

/// Failure while building a `TestContext`.
///
/// Everything the builder does is database setup, so a single variant
/// wrapping `DbErr` covers table creation, index creation, and the session
/// store migration.
#[derive(Error, Debug)]
pub enum TestError {
    #[error("Database error during test setup: {0}")]
    Database(#[from] sea_orm::DbErr),
}
