use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikeOutcome {
    pub media_id: Uuid,
    pub likes: i64,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LikeMediaError {
    #[error("No active session")]
    AuthRequired,

    #[error("Media not found")]
    NotFound,

    /// The increment was not stored; `likes` is the last confirmed value.
    #[error("Failed to record like: {reason}")]
    RolledBack { likes: i64, reason: String },
}

#[async_trait]
pub trait LikeMediaUseCase: Send + Sync {
    async fn execute(&self, session: &Session, media_id: Uuid)
        -> Result<LikeOutcome, LikeMediaError>;
}
