use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260802_000005_create_audio_collection_table::AudioCollection;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AudioFile::Table)
                    .if_not_exists()
                    .col(pk_auto(AudioFile::Id))
                    .col(integer(AudioFile::CollectionId))
                    .col(string(AudioFile::Title))
                    .col(string(AudioFile::StorageUrl))
                    .col(integer_null(AudioFile::DurationSeconds))
                    .col(big_integer_null(AudioFile::SizeBytes))
                    .col(timestamp_with_time_zone(AudioFile::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_audio_file_collection")
                            .from(AudioFile::Table, AudioFile::CollectionId)
                            .to(AudioCollection::Table, AudioCollection::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AudioFile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AudioFile {
    Table,
    Id,
    CollectionId,
    Title,
    StorageUrl,
    DurationSeconds,
    SizeBytes,
    CreatedAt,
}
