use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Session,
    multimedia::application::{
        domain::entities::MediaItem,
        ports::{
            incoming::use_cases::{
                DeleteMediaError, DeleteMediaOutcome, DeleteMediaUseCase, UpdateMediaCommand,
                UpdateMediaError, UpdateMediaUseCase,
            },
            outgoing::{
                cloud_storage::{ObjectStorage, StorageError},
                db::{MediaRepository, MediaRepositoryError},
            },
        },
    },
};

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct UpdateMediaService<R>
where
    R: MediaRepository,
{
    repository: R,
}

impl<R> UpdateMediaService<R>
where
    R: MediaRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateMediaUseCase for UpdateMediaService<R>
where
    R: MediaRepository + Send + Sync,
{
    async fn execute(&self, command: UpdateMediaCommand) -> Result<MediaItem, UpdateMediaError> {
        let (media_id, update) = command.into_parts();
        self.repository
            .update(media_id, update)
            .await
            .map_err(|e| match e {
                MediaRepositoryError::NotFound => UpdateMediaError::NotFound,
                MediaRepositoryError::DatabaseError(msg) => UpdateMediaError::RepositoryError(msg),
            })
    }
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

pub struct DeleteMediaService<S, R>
where
    S: ObjectStorage,
    R: MediaRepository,
{
    storage: S,
    repository: R,
}

impl<S, R> DeleteMediaService<S, R>
where
    S: ObjectStorage,
    R: MediaRepository,
{
    pub fn new(storage: S, repository: R) -> Self {
        Self {
            storage,
            repository,
        }
    }
}

#[async_trait]
impl<S, R> DeleteMediaUseCase for DeleteMediaService<S, R>
where
    S: ObjectStorage + Send + Sync,
    R: MediaRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        media_id: Uuid,
    ) -> Result<DeleteMediaOutcome, DeleteMediaError> {
        if !session.is_active() {
            return Err(DeleteMediaError::AuthRequired);
        }

        // Row first, then the object on a best-effort basis.
        let deleted = self
            .repository
            .delete(media_id)
            .await
            .map_err(|e| match e {
                MediaRepositoryError::NotFound => DeleteMediaError::NotFound,
                MediaRepositoryError::DatabaseError(msg) => DeleteMediaError::RepositoryError(msg),
            })?;

        let Some(key) = deleted.storage_path.filter(|k| !k.trim().is_empty()) else {
            info!("Deleted media {} (no stored object)", media_id);
            return Ok(DeleteMediaOutcome {
                media_id,
                orphaned_key: None,
            });
        };

        let orphaned_key = match self.storage.delete(session, &key).await {
            Ok(()) | Err(StorageError::NotFound(_)) => None,
            Err(e) => {
                warn!(
                    orphaned_key = %key,
                    "Deleted media {} but its object could not be released: {}",
                    media_id,
                    e
                );
                Some(key)
            }
        };

        info!("Deleted media {}", media_id);
        Ok(DeleteMediaOutcome {
            media_id,
            orphaned_key,
        })
    }
}
