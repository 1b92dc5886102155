use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTagError {
    #[error("Tag not found")]
    TagNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait DeleteTagUseCase: Send + Sync {
    async fn execute(&self, tag_id: Uuid) -> Result<(), DeleteTagError>;
}
