use async_trait::async_trait;

use crate::tags::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagQuery: Send + Sync {
    /// All tags ordered by name.
    async fn list_tags(&self) -> Result<Vec<Tag>, TagQueryError>;
}
