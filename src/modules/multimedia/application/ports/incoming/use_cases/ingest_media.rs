use async_trait::async_trait;
use bytes::Bytes;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Session,
    multimedia::application::{
        domain::{
            entities::{MediaItem, MediaType, PublishStatus, SharedMetadata},
            policies::ingest_policy::IngestPolicy,
        },
        ports::outgoing::cloud_storage::StorageError,
    },
};

const MAX_TITLE_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Inputs
// ──────────────────────────────────────────────────────────
//

/// One local file as received from the uploader.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: String,
    pub content_type: String,
    /// Size the client declared (or the bytes read so far when the read was cut short).
    pub declared_size: u64,
    pub bytes: Bytes,
}

impl IncomingFile {
    pub fn new(file_name: String, content_type: String, bytes: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            declared_size: bytes.len() as u64,
            bytes,
        }
    }

    pub fn media_type(&self) -> MediaType {
        MediaType::from_content_type(&self.content_type)
    }
}

#[derive(Debug, Clone)]
pub enum IngestSource {
    Files(Vec<IncomingFile>),
    Link { url: String, selected_type: MediaType },
}

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestCommandError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("Title too long (max {max} characters)")]
    TitleTooLong { max: usize },

    #[error("Please select one or more files to upload")]
    NoFiles,

    #[error("Please enter a URL")]
    EmptyUrl,

    #[error("A submission is either files or a link, not both")]
    ConflictingSources,

    #[error("File {file_name} too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge {
        file_name: String,
        max_bytes: u64,
        actual_bytes: u64,
    },
}

/// Validated submission. Only obtainable through [`IngestMediaCommandBuilder::build`].
#[derive(Debug, Clone)]
pub struct IngestMediaCommand {
    submission_id: Uuid,
    source: IngestSource,
    metadata: SharedMetadata,
}

impl IngestMediaCommand {
    pub fn builder() -> IngestMediaCommandBuilder {
        IngestMediaCommandBuilder::default()
    }

    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn source(&self) -> &IngestSource {
        &self.source
    }

    pub fn metadata(&self) -> &SharedMetadata {
        &self.metadata
    }

    pub fn file_count(&self) -> usize {
        match &self.source {
            IngestSource::Files(files) => files.len(),
            IngestSource::Link { .. } => 0,
        }
    }

    pub fn into_parts(self) -> (Uuid, IngestSource, SharedMetadata) {
        (self.submission_id, self.source, self.metadata)
    }
}

fn trimmed_or_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trimmed, non-empty, first occurrence wins.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    }
    out
}

#[derive(Default)]
pub struct IngestMediaCommandBuilder {
    submission_id: Option<Uuid>,
    title: Option<String>,
    description: Option<String>,
    date: Option<NaiveDate>,
    location: Option<String>,
    tags: Vec<String>,
    status: Option<PublishStatus>,
    is_featured: bool,
    files: Option<Vec<IncomingFile>>,
    link: Option<(String, MediaType)>,
}

impl IngestMediaCommandBuilder {
    pub fn submission_id(mut self, id: Uuid) -> Self {
        self.submission_id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    pub fn location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn status(mut self, status: PublishStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn files(mut self, files: Vec<IncomingFile>) -> Self {
        self.files = Some(files);
        self
    }

    pub fn link(mut self, url: impl Into<String>, selected_type: MediaType) -> Self {
        self.link = Some((url.into(), selected_type));
        self
    }

    /// Validates in a fixed order: title, source presence, file sizes.
    /// Nothing here performs I/O.
    pub fn build(self, policy: &IngestPolicy) -> Result<IngestMediaCommand, IngestCommandError> {
        // 1) Title
        let title = self.title.unwrap_or_default().trim().to_string();
        if title.is_empty() {
            return Err(IngestCommandError::EmptyTitle);
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(IngestCommandError::TitleTooLong { max: MAX_TITLE_LEN });
        }

        // 2) Source
        let source = match (self.files, self.link) {
            (Some(_), Some(_)) => return Err(IngestCommandError::ConflictingSources),
            (Some(files), None) => {
                if files.is_empty() {
                    return Err(IngestCommandError::NoFiles);
                }

                // 3) Size ceiling, any offender rejects the whole submission
                if let Some(too_big) = files
                    .iter()
                    .find(|f| f.declared_size > policy.max_file_size_bytes)
                {
                    return Err(IngestCommandError::FileTooLarge {
                        file_name: too_big.file_name.clone(),
                        max_bytes: policy.max_file_size_bytes,
                        actual_bytes: too_big.declared_size,
                    });
                }

                IngestSource::Files(files)
            }
            (None, Some((url, selected_type))) => {
                let url = url.trim().to_string();
                if url.is_empty() {
                    return Err(IngestCommandError::EmptyUrl);
                }
                IngestSource::Link { url, selected_type }
            }
            (None, None) => return Err(IngestCommandError::NoFiles),
        };

        let metadata = SharedMetadata {
            title,
            description: trimmed_or_none(self.description),
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            location: trimmed_or_none(self.location),
            tags: normalize_tags(self.tags),
            status: self.status.unwrap_or_default(),
            is_featured: self.is_featured,
        };

        Ok(IngestMediaCommand {
            submission_id: self.submission_id.unwrap_or_else(Uuid::new_v4),
            source,
            metadata,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Result & Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct IngestResult {
    pub submission_id: Uuid,
    pub items: Vec<MediaItem>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum IngestMediaError {
    #[error("No active session")]
    AuthRequired,

    #[error("Upload of {file_name} failed: {source}")]
    UploadFailed {
        file_name: String,
        #[source]
        source: StorageError,
        orphaned_keys: Vec<String>,
    },

    #[error("Submission timed out after {after:?}")]
    Timeout {
        after: Duration,
        orphaned_keys: Vec<String>,
    },

    #[error("Uploaded objects could not be recorded: {reason}")]
    PartialBatch {
        orphaned_keys: Vec<String>,
        reason: String,
    },

    #[error("Submission {0} is already in flight")]
    SubmissionInFlight(Uuid),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait IngestMediaUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        command: IngestMediaCommand,
    ) -> Result<IngestResult, IngestMediaError>;

    /// Upload and validation limits the use case enforces.
    fn policy(&self) -> &IngestPolicy;
}
