//! # Media Table Migration
//!
//! ## Purpose
//! The `media` table holds one row per gallery entry: a photo or a video that was
//! either uploaded into object storage or linked from an external host (YouTube).
//!
//! ## Key Columns Explained
//!
//! ### Source columns
//! - `storage_path`: key of the uploaded object inside the media bucket. Only set for
//!   file uploads and used to release the object when the row is deleted.
//! - `storage_url`: public URL derived from `storage_path`.
//! - `external_url`: link supplied by the uploader. Normally exactly one of
//!   `storage_url` / `external_url` is set.
//! - `thumbnail_url`: poster for uploaded videos, derived thumbnail for YouTube links.
//!
//! ### Visibility
//! - `status`: `draft` rows are only visible to administrators.
//! - `is_featured`: independent of `status`, drives the home carousel.
//!
//! ### Counters
//! - `views`, `likes`: only changed through `increment_views` / `increment_likes`
//!   or an administrative edit.
//!
//! ## Indexes
//! - `idx_media_published_created`: public listing (published, newest first)
//! - `idx_media_featured`: featured carousel lookups
//! - `idx_media_tags`: GIN index for `tags @> ARRAY[...]` filters

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Shared updated_at trigger function
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = now();
                    RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;
                "#,
            )
            .await?;

        // =====================================================
        // Create media table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Media::Title).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Media::Type)
                            .string_len(16)
                            .not_null()
                            .check(Expr::cust("type IN ('photo', 'video')")),
                    )
                    // =========================================
                    // Sources
                    // =========================================
                    .col(ColumnDef::new(Media::StoragePath).string_len(1024))
                    .col(ColumnDef::new(Media::StorageUrl).text())
                    .col(ColumnDef::new(Media::ExternalUrl).text())
                    .col(ColumnDef::new(Media::ThumbnailUrl).text())
                    // =========================================
                    // Descriptive metadata
                    // =========================================
                    .col(ColumnDef::new(Media::Description).text())
                    .col(
                        ColumnDef::new(Media::Date)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .col(ColumnDef::new(Media::Location).string_len(255))
                    .col(
                        ColumnDef::new(Media::Tags)
                            .array(ColumnType::Text)
                            .not_null()
                            .default(Expr::cust("'{}'::text[]")),
                    )
                    .col(
                        ColumnDef::new(Media::Photographer)
                            .string_len(255)
                            .not_null()
                            .default("Admin"),
                    )
                    // =========================================
                    // Visibility
                    // =========================================
                    .col(
                        ColumnDef::new(Media::Status)
                            .string_len(16)
                            .not_null()
                            .default("published")
                            .check(Expr::cust("status IN ('draft', 'published')")),
                    )
                    .col(
                        ColumnDef::new(Media::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // =========================================
                    // Counters
                    // =========================================
                    .col(
                        ColumnDef::new(Media::Views)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("views >= 0")),
                    )
                    .col(
                        ColumnDef::new(Media::Likes)
                            .big_integer()
                            .not_null()
                            .default(0)
                            .check(Expr::cust("likes >= 0")),
                    )
                    // =========================================
                    // Audit timestamps
                    // =========================================
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Media::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_published_created
                ON media (created_at DESC)
                WHERE status = 'published';
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_featured
                ON media (created_at DESC)
                WHERE is_featured = true;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_tags
                ON media USING GIN (tags);
                "#,
            )
            .await?;

        // One row per stored object
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_media_storage_path_unique
                ON media (storage_path)
                WHERE storage_path IS NOT NULL;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_media_updated_at
                BEFORE UPDATE ON media
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_media_updated_at ON media;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_media_published_created;
                DROP INDEX IF EXISTS idx_media_featured;
                DROP INDEX IF EXISTS idx_media_tags;
                DROP INDEX IF EXISTS idx_media_storage_path_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP FUNCTION IF EXISTS update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    Title,
    Type,
    StoragePath,
    StorageUrl,
    ExternalUrl,
    ThumbnailUrl,
    Description,
    Date,
    Location,
    Tags,
    Photographer,
    Status,
    IsFeatured,
    Views,
    Likes,
    CreatedAt,
    UpdatedAt,
}
