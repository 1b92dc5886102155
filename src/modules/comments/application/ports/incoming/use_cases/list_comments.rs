use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::domain::entities::Comment;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error("Failed to fetch comments: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(&self, media_id: Uuid) -> Result<Vec<Comment>, ListCommentsError>;
}
