use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    CommentNotFound,

    #[error("Only the author can delete this comment")]
    NotOwner,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, session: &Session, comment_id: Uuid) -> Result<(), DeleteCommentError>;
}
