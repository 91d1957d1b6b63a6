use sea_orm_migration::{prelude::*, schema::*};

use super::m20231101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShareNote::Table)
                    .if_not_exists()
                    .col(string(ShareNote::Id).primary_key())
                    .col(string(ShareNote::UserId))
                    .col(string(ShareNote::LocalId))
                    .col(text(ShareNote::Data))
                    .col(integer(ShareNote::Click).default(0))
                    .col(integer(ShareNote::Keeps).default(0))
                    .col(
                        timestamp_with_time_zone(ShareNote::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ShareNote::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(ShareNote::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_share_note_user_id")
                            .from(ShareNote::Table, ShareNote::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShareNote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShareNote {
    Table,
    Id,
    UserId,
    LocalId,
    Data,
    Click,
    Keeps,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
