pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_mosque_table;
mod m20260801_000002_create_admin_user_table;
mod m20260801_000003_create_subscriber_table;
mod m20260802_000004_create_message_table;
mod m20260802_000005_create_audio_collection_table;
mod m20260802_000006_create_audio_file_table;
mod m20260803_000007_create_prayer_time_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_mosque_table::Migration),
            Box::new(m20260801_000002_create_admin_user_table::Migration),
            Box::new(m20260801_000003_create_subscriber_table::Migration),
            Box::new(m20260802_000004_create_message_table::Migration),
            Box::new(m20260802_000005_create_audio_collection_table::Migration),
            Box::new(m20260802_000006_create_audio_file_table::Migration),
            Box::new(m20260803_000007_create_prayer_time_table::Migration),
        ]
    }
}
