use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Comments on one media item, newest first.
    async fn list_for_media(&self, media_id: Uuid) -> Result<Vec<Comment>, CommentQueryError>;

    async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError>;
}
