use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::tags::application::{
    domain::entities::Tag,
    ports::outgoing::{TagRepository, TagRepositoryError},
};

use super::sea_orm_entity::{ActiveModel as TagActiveModel, Entity as TagEntity};

#[derive(Debug, Clone)]
pub struct TagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Postgres 23505 on the case-insensitive name index.
fn is_unique_violation(err: &DbErr) -> bool {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        return true;
    }
    let msg = err.to_string();
    msg.contains("23505") || msg.contains("duplicate key")
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn create_tag(&self, name: String) -> Result<Tag, TagRepositoryError> {
        let active = TagActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                TagRepositoryError::TagAlreadyExists
            } else {
                TagRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_tag())
    }

    async fn delete_tag(&self, tag_id: Uuid) -> Result<(), TagRepositoryError> {
        let result = TagEntity::delete_by_id(tag_id)
            .exec(&*self.db)
            .await
            .map_err(|e| TagRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(TagRepositoryError::TagNotFound);
        }

        Ok(())
    }
}
