use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::Session,
    multimedia::application::{
        domain::entities::{MediaItem, PublishStatus},
        ports::{incoming::use_cases::normalize_tags, outgoing::db::MediaUpdate},
    },
};

const MAX_TITLE_LEN: usize = 255;

//
// ──────────────────────────────────────────────────────────
// Update
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateMediaCommandError {
    #[error("Nothing to update")]
    Empty,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Title too long (max {max} characters)")]
    TitleTooLong { max: usize },

    #[error("{field} cannot be negative")]
    NegativeCounter { field: &'static str },
}

/// Validated administrative edit.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateMediaCommand {
    media_id: Uuid,
    update: MediaUpdate,
}

impl UpdateMediaCommand {
    pub fn new(media_id: Uuid, raw: MediaUpdate) -> Result<Self, UpdateMediaCommandError> {
        if raw.is_empty() {
            return Err(UpdateMediaCommandError::Empty);
        }

        let title = match raw.title {
            Some(title) => {
                let title = title.trim().to_string();
                if title.is_empty() {
                    return Err(UpdateMediaCommandError::EmptyTitle);
                }
                if title.chars().count() > MAX_TITLE_LEN {
                    return Err(UpdateMediaCommandError::TitleTooLong { max: MAX_TITLE_LEN });
                }
                Some(title)
            }
            None => None,
        };

        if raw.views.is_some_and(|v| v < 0) {
            return Err(UpdateMediaCommandError::NegativeCounter { field: "views" });
        }
        if raw.likes.is_some_and(|v| v < 0) {
            return Err(UpdateMediaCommandError::NegativeCounter { field: "likes" });
        }

        Ok(Self {
            media_id,
            update: MediaUpdate {
                title,
                // Empty string clears the column.
                description: raw.description.map(|d| d.trim().to_string()),
                location: raw.location.map(|l| l.trim().to_string()),
                tags: raw.tags.map(normalize_tags),
                ..raw
            },
        })
    }

    pub fn media_id(&self) -> Uuid {
        self.media_id
    }

    pub fn update(&self) -> &MediaUpdate {
        &self.update
    }

    pub fn into_parts(self) -> (Uuid, MediaUpdate) {
        (self.media_id, self.update)
    }
}

/// Shorthand for the console's publish toggle.
pub fn status_change(status: PublishStatus) -> MediaUpdate {
    MediaUpdate {
        status: Some(status),
        ..MediaUpdate::default()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateMediaError {
    #[error("Media not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateMediaUseCase: Send + Sync {
    async fn execute(&self, command: UpdateMediaCommand) -> Result<MediaItem, UpdateMediaError>;
}

//
// ──────────────────────────────────────────────────────────
// Delete
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMediaOutcome {
    pub media_id: Uuid,
    /// Storage key that could not be released and is now orphaned.
    pub orphaned_key: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMediaError {
    #[error("No active session")]
    AuthRequired,

    #[error("Media not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMediaUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        media_id: Uuid,
    ) -> Result<DeleteMediaOutcome, DeleteMediaError>;
}
