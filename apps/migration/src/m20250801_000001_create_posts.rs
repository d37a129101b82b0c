use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Posts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Posts::Title).string_len(300).not_null())
                    .col(ColumnDef::new(Posts::Url).text().not_null())
                    .col(
                        ColumnDef::new(Posts::Points)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Posts::SubmittedById).uuid().not_null())
                    .col(ColumnDef::new(Posts::SubmittedByName).string().not_null())
                    .col(
                        ColumnDef::new(Posts::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Posts::Votes)
                            .array(ColumnType::Uuid)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Uniqueness is enforced here rather than by check-then-insert
        // in the repository: two concurrent submissions of the same url
        // must not both land.
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_url_unique")
                    .table(Posts::Table)
                    .col(Posts::Url)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Covering index for the ranked listing query.
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_ranking")
                    .table(Posts::Table)
                    .col((Posts::Points, IndexOrder::Desc))
                    .col((Posts::SubmittedAt, IndexOrder::Desc))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    Title,
    Url,
    Points,
    SubmittedById,
    SubmittedByName,
    SubmittedAt,
    Votes,
}
