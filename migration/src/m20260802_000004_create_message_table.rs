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
                    .table(Message::Table)
                    .if_not_exists()
                    .col(pk_auto(Message::Id))
                    .col(integer(Message::MosqueId))
                    .col(string(Message::Title))
                    .col(text(Message::Body))
                    .col(string(Message::Category))
                    .col(string(Message::Status))
                    .col(timestamp_with_time_zone_null(Message::ScheduledAt))
                    .col(integer(Message::RecipientCount))
                    .col(timestamp_with_time_zone_null(Message::SentAt))
                    .col(timestamp_with_time_zone(Message::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_mosque")
                            .from(Message::Table, Message::MosqueId)
                            .to(Mosque::Table, Mosque::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Message {
    Table,
    Id,
    MosqueId,
    Title,
    Body,
    Category,
    Status,
    ScheduledAt,
    RecipientCount,
    SentAt,
    CreatedAt,
}
