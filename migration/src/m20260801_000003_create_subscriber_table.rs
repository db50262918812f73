use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_create_mosque_table::Mosque;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscriber::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscriber::Id))
                    .col(integer(Subscriber::MosqueId))
                    .col(string(Subscriber::Phone))
                    .col(string(Subscriber::Status))
                    .col(boolean(Subscriber::NotifyAnnouncements))
                    .col(boolean(Subscriber::NotifyPrayerReminders))
                    .col(boolean(Subscriber::NotifyAudio))
                    .col(integer_null(Subscriber::ReminderOffsetMinutes))
                    .col(string_null(Subscriber::PushEndpoint))
                    .col(string_null(Subscriber::PushP256dh))
                    .col(string_null(Subscriber::PushAuth))
                    .col(timestamp_with_time_zone(Subscriber::CreatedAt))
                    .col(timestamp_with_time_zone(Subscriber::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subscriber_mosque")
                            .from(Subscriber::Table, Subscriber::MosqueId)
                            .to(Mosque::Table, Mosque::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert-dedup during subscribe and bulk import keys on this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_subscriber_mosque_phone")
                    .table(Subscriber::Table)
                    .col(Subscriber::MosqueId)
                    .col(Subscriber::Phone)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Subscriber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Subscriber {
    Table,
    Id,
    MosqueId,
    Phone,
    Status,
    NotifyAnnouncements,
    NotifyPrayerReminders,
    NotifyAudio,
    ReminderOffsetMinutes,
    PushEndpoint,
    PushP256dh,
    PushAuth,
    CreatedAt,
    UpdatedAt,
}
