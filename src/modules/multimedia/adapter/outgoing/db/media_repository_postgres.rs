use async_trait::async_trait;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::multimedia::application::{
    domain::entities::{MediaDraft, MediaItem},
    ports::outgoing::db::{MediaRepository, MediaRepositoryError, MediaUpdate},
};

use super::sea_orm_entity::media::{ActiveModel, Column, Entity};

// ============================================================================
// Repository Implementation (Production)
// ============================================================================

#[derive(Debug, Clone)]
pub struct MediaRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// `SELECT increment_<counter>($1)`; the function returns NULL for an unknown id.
    fn increment_stmt(function: &str, media_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!("SELECT {function}($1) AS value"),
            vec![media_id.into()],
        )
    }

    async fn increment(&self, function: &str, media_id: Uuid) -> Result<i64, MediaRepositoryError> {
        let row = self
            .db
            .query_one(Self::increment_stmt(function, media_id))
            .await
            .map_err(map_db_err)?
            .ok_or(MediaRepositoryError::NotFound)?;

        let value: Option<i64> = row.try_get("", "value").map_err(map_db_err)?;
        value.ok_or(MediaRepositoryError::NotFound)
    }
}

#[async_trait]
impl MediaRepository for MediaRepositoryPostgres {
    async fn insert_batch(
        &self,
        drafts: Vec<MediaDraft>,
    ) -> Result<Vec<MediaItem>, MediaRepositoryError> {
        if drafts.is_empty() {
            return Ok(vec![]);
        }

        let models = Entity::insert_many(drafts.into_iter().map(draft_to_active_model))
            .exec_with_returning_many(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn update(
        &self,
        media_id: Uuid,
        update: MediaUpdate,
    ) -> Result<MediaItem, MediaRepositoryError> {
        let model = update_to_active_model(update);

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(media_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(MediaRepositoryError::NotFound)
    }

    async fn delete(&self, media_id: Uuid) -> Result<MediaItem, MediaRepositoryError> {
        let existing = Entity::find_by_id(media_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MediaRepositoryError::NotFound)?;

        let result = Entity::delete_by_id(media_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MediaRepositoryError::NotFound);
        }

        Ok(existing.to_domain())
    }

    async fn increment_views(&self, media_id: Uuid) -> Result<i64, MediaRepositoryError> {
        self.increment("increment_views", media_id).await
    }

    async fn increment_likes(&self, media_id: Uuid) -> Result<i64, MediaRepositoryError> {
        self.increment("increment_likes", media_id).await
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> MediaRepositoryError {
    MediaRepositoryError::DatabaseError(e.to_string())
}

fn draft_to_active_model(draft: MediaDraft) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(draft.title),
        media_type: Set(draft.media_type.into()),
        storage_path: Set(draft.storage_path),
        storage_url: Set(draft.storage_url),
        external_url: Set(draft.external_url),
        thumbnail_url: Set(draft.thumbnail_url),
        description: Set(draft.description),
        date: Set(draft.date),
        location: Set(draft.location),
        tags: Set(draft.tags),
        photographer: Set(draft.photographer),
        status: Set(draft.status.into()),
        is_featured: Set(draft.is_featured),
        ..Default::default()
    }
}

/// Empty strings clear the optional text columns.
fn update_to_active_model(update: MediaUpdate) -> ActiveModel {
    let mut model = ActiveModel::default();

    if let Some(title) = update.title {
        model.title = Set(title);
    }
    if let Some(description) = update.description {
        model.description = Set(Some(description).filter(|d| !d.is_empty()));
    }
    if let Some(location) = update.location {
        model.location = Set(Some(location).filter(|l| !l.is_empty()));
    }
    if let Some(tags) = update.tags {
        model.tags = Set(tags);
    }
    if let Some(status) = update.status {
        model.status = Set(status.into());
    }
    if let Some(is_featured) = update.is_featured {
        model.is_featured = Set(is_featured);
    }
    if let Some(views) = update.views {
        model.views = Set(views);
    }
    if let Some(likes) = update.likes {
        model.likes = Set(likes);
    }

    model
}
