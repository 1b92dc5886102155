use async_trait::async_trait;

use crate::multimedia::application::ports::{
    incoming::use_cases::{MediaStatsError, MediaStatsUseCase},
    outgoing::db::{MediaQuery, MediaStats},
};

#[derive(Debug, Clone)]
pub struct MediaStatsService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    query: Q,
}

impl<Q> MediaStatsService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> MediaStatsUseCase for MediaStatsService<Q>
where
    Q: MediaQuery + Send + Sync,
{
    async fn execute(&self) -> Result<MediaStats, MediaStatsError> {
        self.query
            .stats()
            .await
            .map_err(|e| MediaStatsError::QueryFailed(e.to_string()))
    }
}
