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
                    .table(AudioCollection::Table)
                    .if_not_exists()
                    .col(pk_auto(AudioCollection::Id))
                    .col(integer(AudioCollection::MosqueId))
                    .col(string(AudioCollection::Title))
                    .col(string_null(AudioCollection::Description))
                    .col(timestamp_with_time_zone(AudioCollection::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audio_collection_mosque")
                            .from(AudioCollection::Table, AudioCollection::MosqueId)
                            .to(Mosque::Table, Mosque::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AudioCollection::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AudioCollection {
    Table,
    Id,
    MosqueId,
    Title,
    Description,
    CreatedAt,
}
