//! Create media table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::FilePath).string_len(256).not_null())
                    // NULL until the owning tweet exists
                    .col(ColumnDef::new(Media::TweetId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_media_tweet")
                            .from(Media::Table, Media::TweetId)
                            .to(Tweets::Table, Tweets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: tweet_id (for attachment lookups)
        manager
            .create_index(
                Index::create()
                    .name("idx_media_tweet_id")
                    .table(Media::Table)
                    .col(Media::TweetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Media {
    Table,
    Id,
    FilePath,
    TweetId,
}

#[derive(Iden)]
enum Tweets {
    Table,
    Id,
}
