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
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminUser::Id))
                    .col(integer(AdminUser::MosqueId))
                    .col(string_uniq(AdminUser::Email))
                    .col(string(AdminUser::PasswordHash))
                    .col(string(AdminUser::Name))
                    .col(timestamp_with_time_zone(AdminUser::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_user_mosque")
                            .from(AdminUser::Table, AdminUser::MosqueId)
                            .to(Mosque::Table, Mosque::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminUser {
    Table,
    Id,
    MosqueId,
    Email,
    PasswordHash,
    Name,
    CreatedAt,
}
