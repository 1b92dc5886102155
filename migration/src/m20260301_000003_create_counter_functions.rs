//! Counter procedures for the media table.
//!
//! `increment_views` and `increment_likes` bump a single row atomically and
//! return the new value, or NULL when the row does not exist.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION increment_views(media_id uuid)
                RETURNS bigint AS $$
                    UPDATE media SET views = views + 1
                    WHERE id = media_id
                    RETURNING views;
                $$ LANGUAGE sql;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION increment_likes(media_id uuid)
                RETURNS bigint AS $$
                    UPDATE media SET likes = likes + 1
                    WHERE id = media_id
                    RETURNING likes;
                $$ LANGUAGE sql;
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
                DROP FUNCTION IF EXISTS increment_views(uuid);
                DROP FUNCTION IF EXISTS increment_likes(uuid);
                "#,
            )
            .await?;

        Ok(())
    }
}
