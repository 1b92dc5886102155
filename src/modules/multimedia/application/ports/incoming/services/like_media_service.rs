use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Session,
    multimedia::application::{
        domain::{entities::PublishStatus, optimistic_counter::OptimisticCounter},
        ports::{
            incoming::use_cases::{LikeMediaError, LikeMediaUseCase, LikeOutcome},
            outgoing::db::{MediaQuery, MediaRepository, MediaRepositoryError},
        },
    },
};

pub struct LikeMediaService<Q, R>
where
    Q: MediaQuery,
    R: MediaRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> LikeMediaService<Q, R>
where
    Q: MediaQuery,
    R: MediaRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> LikeMediaUseCase for LikeMediaService<Q, R>
where
    Q: MediaQuery + Send + Sync,
    R: MediaRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        media_id: Uuid,
    ) -> Result<LikeOutcome, LikeMediaError> {
        if !session.is_active() {
            return Err(LikeMediaError::AuthRequired);
        }

        let item = self
            .query
            .find_by_id(media_id)
            .await
            .map_err(|e| LikeMediaError::RolledBack {
                likes: 0,
                reason: e.to_string(),
            })?
            .filter(|item| item.status == PublishStatus::Published)
            .ok_or(LikeMediaError::NotFound)?;

        let confirmed = item.likes;
        let mut counter = OptimisticCounter::new(confirmed);
        let speculative = counter.speculate_increment().unwrap_or(confirmed + 1);
        debug!(
            "Like on {} by {}: {} -> {} (pending)",
            media_id, session.user_id, confirmed, speculative
        );

        match self.repository.increment_likes(media_id).await {
            Ok(stored) => {
                let likes = counter.commit(stored).unwrap_or(stored);
                Ok(LikeOutcome { media_id, likes })
            }
            Err(e) => {
                let likes = counter.rollback().unwrap_or(confirmed);
                warn!("Like on {} rolled back to {}: {}", media_id, likes, e);
                match e {
                    MediaRepositoryError::NotFound => Err(LikeMediaError::NotFound),
                    other => Err(LikeMediaError::RolledBack {
                        likes,
                        reason: other.to_string(),
                    }),
                }
            }
        }
    }
}
