use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mosque::Table)
                    .if_not_exists()
                    .col(pk_auto(Mosque::Id))
                    .col(string(Mosque::Name))
                    .col(string(Mosque::Timezone))
                    .col(string(Mosque::CalculationMethod))
                    .col(string(Mosque::Madhab))
                    .col(boolean(Mosque::RamadanMode))
                    .col(integer(Mosque::ReminderOffsetMinutes))
                    .col(string_null(Mosque::WhatsappNumber))
                    .col(timestamp_with_time_zone(Mosque::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mosque::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mosque {
    Table,
    Id,
    Name,
    Timezone,
    CalculationMethod,
    Madhab,
    RamadanMode,
    ReminderOffsetMinutes,
    WhatsappNumber,
    CreatedAt,
}
