use async_trait::async_trait;

use crate::multimedia::application::ports::outgoing::db::MediaStats;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStatsError {
    #[error("Failed to compute stats: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait MediaStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<MediaStats, MediaStatsError>;
}
