use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Mosque, Subscriber};
///
/// let test = TestBuilder::new()
///     .with_table(Mosque)
///     .with_table(Subscriber)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Vector of CREATE INDEX statements executed after the tables exist.
    ///
    /// Entity models cannot express composite unique indexes, so upsert paths
    /// that key on one (subscriber phone, prayer timetable date) need the index
    /// created explicitly here to behave like the migrated schema.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create after the tables.
    ///
    /// # Arguments
    /// - `stmt` - CREATE INDEX statement to execute during `build()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, stmt: IndexCreateStatement) -> Self {
        self.indexes.push(stmt);
        self
    }

    /// Adds the tables required for subscriber operations.
    ///
    /// This convenience method adds the following in dependency order:
    /// - Mosque
    /// - Subscriber, with its unique (mosque_id, phone) index so upserts
    ///   and import deduplication behave like the migrated schema
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_subscriber_tables(self) -> Self {
        self.with_table(Mosque).with_table(Subscriber).with_index(
            Index::create()
                .name("idx_subscriber_mosque_phone")
                .table(entity::subscriber::Entity)
                .col(entity::subscriber::Column::MosqueId)
                .col(entity::subscriber::Column::Phone)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the tables required for prayer timetable operations.
    ///
    /// This convenience method adds the following in dependency order:
    /// - Mosque
    /// - PrayerTime, with its unique (mosque_id, date) index so day upserts
    ///   behave like the migrated schema
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_prayer_time_tables(self) -> Self {
        self.with_table(Mosque).with_table(PrayerTime).with_index(
            Index::create()
                .name("idx_prayer_time_mosque_date")
                .table(entity::prayer_time::Entity)
                .col(entity::prayer_time::Column::MosqueId)
                .col(entity::prayer_time::Column::Date)
                .unique()
                .to_owned(),
        )
    }

    /// Adds the tables required for message dispatch operations.
    ///
    /// This convenience method adds the following in dependency order:
    /// - Mosque
    /// - Subscriber (with its unique index)
    /// - Message
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_message_tables(self) -> Self {
        self.with_subscriber_tables().with_table(Message)
    }

    /// Adds the tables required for audio content operations.
    ///
    /// This convenience method adds the following in dependency order:
    /// - Mosque
    /// - AudioCollection
    /// - AudioFile
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_audio_tables(self) -> Self {
        self.with_table(Mosque)
            .with_table(AudioCollection)
            .with_table(AudioFile)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection, executes all CREATE TABLE
    /// statements that were added via `with_table()`, then the CREATE INDEX
    /// statements. Tables are created in the order they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
