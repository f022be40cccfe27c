//! Create tweets table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tweets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tweets::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tweets::Content).text().not_null())
                    .col(ColumnDef::new(Tweets::AuthorId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tweets_author")
                            .from(Tweets::Table, Tweets::AuthorId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: author_id (for per-user tweet lookups)
        manager
            .create_index(
                Index::create()
                    .name("idx_tweets_author_id")
                    .table(Tweets::Table)
                    .col(Tweets::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tweets::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tweets {
    Table,
    Id,
    Content,
    AuthorId,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
