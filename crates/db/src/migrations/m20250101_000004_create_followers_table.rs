//! Create followers table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Followers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Followers::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Followers::FollowingId)
                            .big_integer()
                            .not_null(),
                    )
                    // Composite primary key: a follow pair is unique
                    .primary_key(
                        Index::create()
                            .name("pk_followers")
                            .col(Followers::UserId)
                            .col(Followers::FollowingId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followers_user")
                            .from(Followers::Table, Followers::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_followers_following")
                            .from(Followers::Table, Followers::FollowingId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: following_id (for listing a user's followers)
        manager
            .create_index(
                Index::create()
                    .name("idx_followers_following_id")
                    .table(Followers::Table)
                    .col(Followers::FollowingId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Followers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Followers {
    Table,
    UserId,
    FollowingId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
