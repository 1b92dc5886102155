use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Session,
    multimedia::application::{
        domain::{
            embed_source::{extract_video_id, is_embed_host, thumbnail_url, ThumbnailQuality},
            entities::{MediaDraft, MediaItem, MediaType, SharedMetadata},
            policies::ingest_policy::IngestPolicy,
            progress::{ProgressSlot, ProgressTracker},
            storage_key::{generate_storage_key, sanitize_file_name},
        },
        ports::{
            incoming::use_cases::{
                IncomingFile, IngestMediaCommand, IngestMediaError, IngestMediaUseCase,
                IngestResult, IngestSource,
            },
            outgoing::{
                cloud_storage::{ObjectStorage, StorageError, StoredObject, UploadObject},
                db::MediaRepository,
            },
        },
        submission_registry::SubmissionRegistry,
    },
};

/// A file that reached object storage.
struct UploadedFile {
    file_name: String,
    media_type: MediaType,
    stored: StoredObject,
}

pub struct IngestMediaService<S, R>
where
    S: ObjectStorage,
    R: MediaRepository,
{
    storage: S,
    repository: R,
    policy: IngestPolicy,
    submissions: SubmissionRegistry,
}

impl<S, R> IngestMediaService<S, R>
where
    S: ObjectStorage,
    R: MediaRepository,
{
    pub fn new(
        storage: S,
        repository: R,
        policy: IngestPolicy,
        submissions: SubmissionRegistry,
    ) -> Self {
        Self {
            storage,
            repository,
            policy,
            submissions,
        }
    }

    fn draft_for_upload(&self, meta: &SharedMetadata, upload: UploadedFile) -> MediaDraft {
        let title = if meta.title.is_empty() {
            sanitize_file_name(&upload.file_name, self.policy.max_file_name_len)
        } else {
            meta.title.clone()
        };

        let mut draft = MediaDraft::from_metadata(meta, title, upload.media_type);
        draft.storage_path = Some(upload.stored.key);
        draft.storage_url = Some(upload.stored.public_url);
        if upload.media_type == MediaType::Video {
            draft.thumbnail_url = draft.storage_url.clone();
        }
        draft
    }

    async fn upload_one(
        &self,
        session: &Session,
        file: IncomingFile,
        slot: ProgressSlot,
        uploaded_keys: &Mutex<Vec<String>>,
    ) -> Result<UploadedFile, (String, StorageError)> {
        let media_type = file.media_type();
        let object = UploadObject {
            key: generate_storage_key(&file.file_name),
            content_type: file.content_type,
            bytes: file.bytes,
        };

        match self.storage.upload(session, object, &slot).await {
            Ok(stored) => {
                uploaded_keys
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .push(stored.key.clone());
                Ok(UploadedFile {
                    file_name: file.file_name,
                    media_type,
                    stored,
                })
            }
            Err(e) => Err((file.file_name, e)),
        }
    }

    /// Fan out every upload, wait for all of them, then write one batch.
    async fn upload_and_record(
        &self,
        session: &Session,
        tracker: &ProgressTracker,
        files: Vec<IncomingFile>,
        meta: &SharedMetadata,
        uploaded_keys: &Mutex<Vec<String>>,
    ) -> Result<Vec<MediaItem>, IngestMediaError> {
        let uploads = files.into_iter().enumerate().map(|(index, file)| {
            let slot = tracker.slot(index).unwrap_or_else(ProgressSlot::detached);
            self.upload_one(session, file, slot, uploaded_keys)
        });

        let mut done = Vec::new();
        let mut first_failure = None;
        for outcome in join_all(uploads).await {
            match outcome {
                Ok(uploaded) => done.push(uploaded),
                Err(failure) => {
                    if first_failure.is_none() {
                        first_failure = Some(failure);
                    }
                }
            }
        }

        let keys: Vec<String> = done.iter().map(|u| u.stored.key.clone()).collect();

        if let Some((file_name, source)) = first_failure {
            if !keys.is_empty() {
                warn!(
                    orphaned_keys = ?keys,
                    "Upload of {} failed, objects already stored are left in place",
                    file_name
                );
            }
            return Err(IngestMediaError::UploadFailed {
                file_name,
                source,
                orphaned_keys: keys,
            });
        }

        let drafts = done
            .into_iter()
            .map(|u| self.draft_for_upload(meta, u))
            .collect();

        self.repository
            .insert_batch(drafts)
            .await
            .map_err(|e| {
                warn!(
                    orphaned_keys = ?keys,
                    "Batch insert failed after upload, objects need manual reconciliation: {}",
                    e
                );
                IngestMediaError::PartialBatch {
                    orphaned_keys: keys,
                    reason: e.to_string(),
                }
            })
    }

    async fn ingest_files(
        &self,
        session: &Session,
        submission_id: Uuid,
        files: Vec<IncomingFile>,
        meta: SharedMetadata,
    ) -> Result<IngestResult, IngestMediaError> {
        let tracker = ProgressTracker::new(files.len());
        let _registered = self
            .submissions
            .register(submission_id, tracker.subscribe())
            .map_err(|_| IngestMediaError::SubmissionInFlight(submission_id))?;
        let uploaded_keys = Mutex::new(Vec::new());

        let deadline = self.policy.submission_timeout;
        let run = self.upload_and_record(session, &tracker, files, &meta, &uploaded_keys);

        match tokio::time::timeout(deadline, run).await {
            Ok(Ok(items)) => {
                tracker.complete();
                info!(
                    "Submission {} stored {} media item(s)",
                    submission_id,
                    items.len()
                );
                Ok(IngestResult {
                    submission_id,
                    items,
                })
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                let orphaned_keys = uploaded_keys
                    .into_inner()
                    .unwrap_or_else(|poisoned| poisoned.into_inner());
                warn!(
                    orphaned_keys = ?orphaned_keys,
                    "Submission {} timed out after {:?}",
                    submission_id,
                    deadline
                );
                Err(IngestMediaError::Timeout {
                    after: deadline,
                    orphaned_keys,
                })
            }
        }
    }

    async fn ingest_link(
        &self,
        submission_id: Uuid,
        url: String,
        selected_type: MediaType,
        meta: SharedMetadata,
    ) -> Result<IngestResult, IngestMediaError> {
        let (media_type, thumbnail) = if is_embed_host(&url) {
            let thumb = extract_video_id(&url).map(|id| thumbnail_url(&id, ThumbnailQuality::MaxRes));
            (MediaType::Video, thumb)
        } else {
            (selected_type, None)
        };

        let mut draft = MediaDraft::from_metadata(&meta, meta.title.clone(), media_type);
        draft.external_url = Some(url);
        draft.thumbnail_url = thumbnail;

        let deadline = self.policy.submission_timeout;
        let items = tokio::time::timeout(deadline, self.repository.insert_batch(vec![draft]))
            .await
            .map_err(|_| IngestMediaError::Timeout {
                after: deadline,
                orphaned_keys: Vec::new(),
            })?
            .map_err(|e| IngestMediaError::RepositoryError(e.to_string()))?;

        info!("Submission {} stored a {} link", submission_id, media_type);
        Ok(IngestResult {
            submission_id,
            items,
        })
    }
}

#[async_trait]
impl<S, R> IngestMediaUseCase for IngestMediaService<S, R>
where
    S: ObjectStorage + Send + Sync,
    R: MediaRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        command: IngestMediaCommand,
    ) -> Result<IngestResult, IngestMediaError> {
        if !session.is_active() {
            return Err(IngestMediaError::AuthRequired);
        }

        let (submission_id, source, meta) = command.into_parts();
        match source {
            IngestSource::Files(files) => {
                self.ingest_files(session, submission_id, files, meta).await
            }
            IngestSource::Link { url, selected_type } => {
                self.ingest_link(submission_id, url, selected_type, meta)
                    .await
            }
        }
    }

    fn policy(&self) -> &IngestPolicy {
        &self.policy
    }
}
