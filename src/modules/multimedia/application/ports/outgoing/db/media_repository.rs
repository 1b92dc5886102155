use async_trait::async_trait;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::{MediaDraft, MediaItem, PublishStatus};

/// Administrative edit. `None` leaves a field untouched; an empty string
/// clears an optional text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<PublishStatus>,
    pub is_featured: Option<bool>,
    pub views: Option<i64>,
    pub likes: Option<i64>,
}

impl MediaUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaRepositoryError {
    #[error("Media not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MediaRepository: Send + Sync {
    /// One batched write for all drafts of a submission.
    async fn insert_batch(
        &self,
        drafts: Vec<MediaDraft>,
    ) -> Result<Vec<MediaItem>, MediaRepositoryError>;

    async fn update(
        &self,
        media_id: Uuid,
        update: MediaUpdate,
    ) -> Result<MediaItem, MediaRepositoryError>;

    /// Returns the deleted row so callers can release its storage object.
    async fn delete(&self, media_id: Uuid) -> Result<MediaItem, MediaRepositoryError>;

    /// Returns the new view count.
    async fn increment_views(&self, media_id: Uuid) -> Result<i64, MediaRepositoryError>;

    /// Returns the new like count.
    async fn increment_likes(&self, media_id: Uuid) -> Result<i64, MediaRepositoryError>;
}
