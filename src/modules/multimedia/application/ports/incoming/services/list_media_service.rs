use async_trait::async_trait;

use crate::multimedia::application::{
    domain::embed_source::ThumbnailQuality,
    ports::{
        incoming::use_cases::{
            AdminListMediaQuery, AdminListMediaUseCase, ListMediaError, ListMediaQuery,
            ListMediaUseCase, MediaView,
        },
        outgoing::db::{MediaFilter, MediaQuery},
    },
};

#[derive(Debug, Clone)]
pub struct ListMediaService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListMediaService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn fetch(
        &self,
        filter: MediaFilter,
        quality: ThumbnailQuality,
    ) -> Result<Vec<MediaView>, ListMediaError> {
        let items = self
            .query
            .list(filter)
            .await
            .map_err(|e| ListMediaError::QueryFailed(e.to_string()))?;

        Ok(items
            .into_iter()
            .map(|item| MediaView::new(item, quality))
            .collect())
    }
}

#[async_trait]
impl<Q> ListMediaUseCase for ListMediaService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    async fn execute(&self, query: ListMediaQuery) -> Result<Vec<MediaView>, ListMediaError> {
        // The featured carousel is full width; grid tiles are small.
        let quality = if query.is_featured_strip() {
            ThumbnailQuality::MaxRes
        } else {
            ThumbnailQuality::High
        };
        self.fetch(query.to_filter(), quality).await
    }
}

#[async_trait]
impl<Q> AdminListMediaUseCase for ListMediaService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    async fn execute(&self, query: AdminListMediaQuery) -> Result<Vec<MediaView>, ListMediaError> {
        self.fetch(query.to_filter(), ThumbnailQuality::High).await
    }
}
