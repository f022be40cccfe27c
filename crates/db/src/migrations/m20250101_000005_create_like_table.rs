//! Create like table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Like::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Like::TweetId).big_integer().not_null())
                    .col(ColumnDef::new(Like::UserId).big_integer().not_null())
                    // Composite primary key: a like pair is unique
                    .primary_key(
                        Index::create()
                            .name("pk_like")
                            .col(Like::TweetId)
                            .col(Like::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_tweet")
                            .from(Like::Table, Like::TweetId)
                            .to(Tweets::Table, Tweets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_user")
                            .from(Like::Table, Like::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: user_id (for listing a user's likes)
        manager
            .create_index(
                Index::create()
                    .name("idx_like_user_id")
                    .table(Like::Table)
                    .col(Like::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Like::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Like {
    Table,
    TweetId,
    UserId,
}

#[derive(Iden)]
enum Tweets {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
