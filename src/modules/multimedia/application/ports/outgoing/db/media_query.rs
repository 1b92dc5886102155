use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::multimedia::application::domain::entities::{MediaItem, MediaType, PublishStatus};

/// Listing filter. Results are always newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaFilter {
    pub status: Option<PublishStatus>,
    pub media_type: Option<MediaType>,
    /// Items must carry every tag listed.
    pub tags: Vec<String>,
    pub featured: Option<bool>,
    /// Case-insensitive substring over title, description, location, photographer.
    pub search: Option<String>,
    pub limit: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaStats {
    pub total_photos: u64,
    pub total_videos: u64,
    pub total_views: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MediaQuery: Send + Sync {
    async fn list(&self, filter: MediaFilter) -> Result<Vec<MediaItem>, MediaQueryError>;

    async fn find_by_id(&self, media_id: Uuid) -> Result<Option<MediaItem>, MediaQueryError>;

    /// Counts over published items only.
    async fn stats(&self) -> Result<MediaStats, MediaQueryError>;
}
