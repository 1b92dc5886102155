use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::comments::application::{
    domain::entities::{Comment, NewComment},
    ports::outgoing::{CommentRepository, CommentRepositoryError},
};

use super::sea_orm_entity::{ActiveModel as CommentActiveModel, Entity as CommentEntity};

#[derive(Debug, Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Postgres 23503 on `comments.media_id`.
fn is_missing_media(err: &DbErr) -> bool {
    if matches!(
        err.sql_err(),
        Some(SqlErr::ForeignKeyConstraintViolation(_))
    ) {
        return true;
    }
    let msg = err.to_string();
    msg.contains("23503") || msg.contains("violates foreign key constraint")
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError> {
        let active = CommentActiveModel {
            id: Set(Uuid::new_v4()),
            media_id: Set(comment.media_id),
            user_id: Set(comment.user_id),
            author_name: Set(comment.author_name),
            text: Set(comment.text),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(|e| {
            if is_missing_media(&e) {
                CommentRepositoryError::MediaNotFound
            } else {
                CommentRepositoryError::DatabaseError(e.to_string())
            }
        })?;

        Ok(inserted.to_comment())
    }

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let result = CommentEntity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(|e| CommentRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::CommentNotFound);
        }

        Ok(())
    }
}
