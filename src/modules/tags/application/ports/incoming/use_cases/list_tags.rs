use async_trait::async_trait;

use crate::tags::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTagsError {
    #[error("Failed to fetch tags: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError>;
}
