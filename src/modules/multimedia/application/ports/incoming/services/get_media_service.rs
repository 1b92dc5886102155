use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use crate::multimedia::application::{
    domain::{embed_source::ThumbnailQuality, entities::PublishStatus},
    ports::{
        incoming::use_cases::{GetMediaError, GetMediaUseCase, MediaView},
        outgoing::db::{MediaQuery, MediaRepository},
    },
};

pub struct GetMediaService<Q, R>
where
    Q: MediaQuery,
    R: MediaRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> GetMediaService<Q, R>
where
    Q: MediaQuery,
    R: MediaRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> GetMediaUseCase for GetMediaService<Q, R>
where
    Q: MediaQuery + Send + Sync,
    R: MediaRepository + Send + Sync,
{
    async fn execute(&self, media_id: Uuid) -> Result<MediaView, GetMediaError> {
        let mut item = self
            .query
            .find_by_id(media_id)
            .await
            .map_err(|e| GetMediaError::QueryFailed(e.to_string()))?
            .filter(|item| item.status == PublishStatus::Published)
            .ok_or(GetMediaError::NotFound)?;

        // Best effort; a failed view count never fails the read.
        match self.repository.increment_views(media_id).await {
            Ok(views) => item.views = views,
            Err(e) => warn!("Failed to count view for media {}: {}", media_id, e),
        }

        Ok(MediaView::new(item, ThumbnailQuality::MaxRes))
    }
}
