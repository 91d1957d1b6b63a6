use sea_orm_migration::prelude::*;

use super::m20231101_000002_create_share_note_table::ShareNote;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_share_note_local_id")
                    .table(ShareNote::Table)
                    .col(ShareNote::LocalId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_share_note_user_id_local_id")
                    .table(ShareNote::Table)
                    .col(ShareNote::UserId)
                    .col(ShareNote::LocalId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_share_note_user_id_local_id")
                    .table(ShareNote::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_share_note_local_id")
                    .table(ShareNote::Table)
                    .to_owned(),
            )
            .await
    }
}
