use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::{Expr, Value},
    ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::multimedia::application::{
    domain::entities::MediaItem,
    ports::outgoing::db::{MediaFilter, MediaQuery, MediaQueryError, MediaStats},
};

use super::sea_orm_entity::media::{Column, Entity, MediaKind, MediaStatus};

// ============================================================================
// Query Implementation (Production)
// ============================================================================

#[derive(Debug, Clone)]
pub struct MediaQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn stats_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            r#"
            SELECT
                COUNT(*) FILTER (WHERE type = 'photo') AS total_photos,
                COUNT(*) FILTER (WHERE type = 'video') AS total_videos,
                COALESCE(SUM(views), 0)::bigint AS total_views
            FROM media
            WHERE status = 'published'
            "#,
        )
    }
}

/// `%term%` for ILIKE, with the wildcards and the escape character in
/// `term` matched literally. Postgres escapes with `\` by default.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn filter_condition(filter: &MediaFilter) -> Condition {
    let mut cond = Condition::all();

    if let Some(status) = filter.status {
        cond = cond.add(Column::Status.eq(MediaStatus::from(status)));
    }
    if let Some(media_type) = filter.media_type {
        cond = cond.add(Column::MediaType.eq(MediaKind::from(media_type)));
    }
    if let Some(featured) = filter.featured {
        cond = cond.add(Column::IsFeatured.eq(featured));
    }
    if !filter.tags.is_empty() {
        let tags: Value = filter.tags.clone().into();
        cond = cond.add(Expr::cust_with_values("tags @> ?", [tags]));
    }
    if let Some(search) = filter.search.as_deref() {
        let pattern = contains_pattern(search);
        cond = cond.add(
            Condition::any()
                .add(Expr::col(Column::Title).ilike(&pattern))
                .add(Expr::col(Column::Description).ilike(&pattern))
                .add(Expr::col(Column::Location).ilike(&pattern))
                .add(Expr::col(Column::Photographer).ilike(&pattern)),
        );
    }

    cond
}

#[async_trait]
impl MediaQuery for MediaQueryPostgres {
    async fn list(&self, filter: MediaFilter) -> Result<Vec<MediaItem>, MediaQueryError> {
        let models = Entity::find()
            .filter(filter_condition(&filter))
            .order_by_desc(Column::CreatedAt)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn find_by_id(&self, media_id: Uuid) -> Result<Option<MediaItem>, MediaQueryError> {
        let model = Entity::find_by_id(media_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn stats(&self) -> Result<MediaStats, MediaQueryError> {
        let Some(row) = self
            .db
            .query_one(Self::stats_stmt())
            .await
            .map_err(map_db_err)?
        else {
            return Ok(MediaStats::default());
        };

        let total_photos: i64 = row.try_get("", "total_photos").map_err(map_db_err)?;
        let total_videos: i64 = row.try_get("", "total_videos").map_err(map_db_err)?;
        let total_views: i64 = row.try_get("", "total_views").map_err(map_db_err)?;

        Ok(MediaStats {
            total_photos: total_photos.max(0) as u64,
            total_videos: total_videos.max(0) as u64,
            total_views,
        })
    }
}

fn map_db_err(e: DbErr) -> MediaQueryError {
    MediaQueryError::DatabaseError(e.to_string())
}
