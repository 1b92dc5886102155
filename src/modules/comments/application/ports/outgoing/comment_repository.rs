use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::domain::entities::{Comment, NewComment};

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Comment not found")]
    CommentNotFound,

    #[error("Media not found")]
    MediaNotFound,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError>;

    async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
}
