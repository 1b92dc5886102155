use async_trait::async_trait;
use uuid::Uuid;

use super::list_media::MediaView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMediaError {
    #[error("Media not found")]
    NotFound,

    #[error("Failed to fetch media: {0}")]
    QueryFailed(String),
}

/// Published item detail. Counts a view as a side effect.
#[async_trait]
pub trait GetMediaUseCase: Send + Sync {
    async fn execute(&self, media_id: Uuid) -> Result<MediaView, GetMediaError>;
}
