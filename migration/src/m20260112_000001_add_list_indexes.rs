use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Authors {
    Table,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    AuthorId,
    Status,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on posts.author_id for the per-author listing
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_author_id")
                    .table(Posts::Table)
                    .col(Posts::AuthorId)
                    .to_owned(),
            )
            .await?;

        // Index on posts.status for the status filter
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_status")
                    .table(Posts::Table)
                    .col(Posts::Status)
                    .to_owned(),
            )
            .await?;

        // Default sort of both listings is newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_at")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_authors_created_at")
                    .table(Authors::Table)
                    .col(Authors::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_posts_author_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_posts_status").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_posts_created_at").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_authors_created_at").to_owned())
            .await?;

        Ok(())
    }
}
