//! # Comments Table Migration
//!
//! One row per comment on a media item. `author_name` is captured from the
//! commenter's account when the row is written, so listings need no join.
//! Comments go away with their media row (`ON DELETE CASCADE`).
//!
//! ## Indexes
//! - `idx_comments_media_created`: per-item listing, newest first

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Comments::MediaId).uuid().not_null())
                    .col(ColumnDef::new(Comments::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(Comments::AuthorName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Comments::Text)
                            .text()
                            .not_null()
                            .check(Expr::cust("length(btrim(text)) > 0")),
                    )
                    .col(
                        ColumnDef::new(Comments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_media")
                            .from(Comments::Table, Comments::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_comments_media_created
                ON comments (media_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_comments_media_created;")
            .await?;

        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    MediaId,
    UserId,
    AuthorName,
    Text,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
}
