use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::comments::application::{
    domain::entities::Comment,
    ports::outgoing::{CommentQuery, CommentQueryError},
};

use super::sea_orm_entity::{
    Column as CommentColumn, Entity as CommentEntity, Model as CommentModel,
};

#[derive(Debug, Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list_for_media(&self, media_id: Uuid) -> Result<Vec<Comment>, CommentQueryError> {
        let models: Vec<CommentModel> = CommentEntity::find()
            .filter(CommentColumn::MediaId.eq(media_id))
            .order_by_desc(CommentColumn::CreatedAt)
            .order_by_desc(CommentColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(CommentModel::to_comment).collect())
    }

    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError> {
        let model = CommentEntity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(|e| CommentQueryError::DatabaseError(e.to_string()))?;

        Ok(model.as_ref().map(CommentModel::to_comment))
    }
}
