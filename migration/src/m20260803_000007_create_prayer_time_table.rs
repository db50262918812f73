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
                    .table(PrayerTime::Table)
                    .if_not_exists()
                    .col(pk_auto(PrayerTime::Id))
                    .col(integer(PrayerTime::MosqueId))
                    .col(date(PrayerTime::Date))
                    .col(string(PrayerTime::Fajr))
                    .col(string(PrayerTime::Dhuhr))
                    .col(string(PrayerTime::Asr))
                    .col(string(PrayerTime::Maghrib))
                    .col(string(PrayerTime::Isha))
                    .col(string_null(PrayerTime::Jumuah))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prayer_time_mosque")
                            .from(PrayerTime::Table, PrayerTime::MosqueId)
                            .to(Mosque::Table, Mosque::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_prayer_time_mosque_date")
                    .table(PrayerTime::Table)
                    .col(PrayerTime::MosqueId)
                    .col(PrayerTime::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrayerTime::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrayerTime {
    Table,
    Id,
    MosqueId,
    Date,
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Jumuah,
}
