use async_trait::async_trait;
use uuid::Uuid;

use crate::tags::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Tag not found")]
    TagNotFound,

    #[error("Tag already exists")]
    TagAlreadyExists,
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create_tag(&self, name: String) -> Result<Tag, TagRepositoryError>;

    async fn delete_tag(&self, tag_id: Uuid) -> Result<(), TagRepositoryError>;
}
