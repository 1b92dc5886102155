use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::comments::application::domain::entities::{Comment, MAX_COMMENT_LEN};

//
// ──────────────────────────────────────────────────────────
// Create Comment Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCommentCommand {
    media_id: Uuid,
    text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCommentCommandError {
    #[error("Comment cannot be empty")]
    EmptyText,

    #[error("Comment too long (max {max} characters)")]
    TextTooLong { max: usize },
}

impl CreateCommentCommand {
    pub fn new(media_id: Uuid, text: &str) -> Result<Self, CreateCommentCommandError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(CreateCommentCommandError::EmptyText);
        }

        if text.chars().count() > MAX_COMMENT_LEN {
            return Err(CreateCommentCommandError::TextTooLong {
                max: MAX_COMMENT_LEN,
            });
        }

        Ok(Self {
            media_id,
            text: text.to_string(),
        })
    }

    pub fn media_id(&self) -> Uuid {
        self.media_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Media not found")]
    MediaNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        session: &Session,
        command: CreateCommentCommand,
    ) -> Result<Comment, CreateCommentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_text() {
        let cmd = CreateCommentCommand::new(Uuid::nil(), "\n  Jai Siya Ram  ").unwrap();
        assert_eq!(cmd.text(), "Jai Siya Ram");
    }

    #[test]
    fn rejects_whitespace_only() {
        assert_eq!(
            CreateCommentCommand::new(Uuid::nil(), " \t\n").unwrap_err(),
            CreateCommentCommandError::EmptyText
        );
    }

    #[test]
    fn length_is_counted_in_characters() {
        let at_limit = "ॐ".repeat(MAX_COMMENT_LEN);
        assert!(CreateCommentCommand::new(Uuid::nil(), &at_limit).is_ok());

        let over = "a".repeat(MAX_COMMENT_LEN + 1);
        assert!(matches!(
            CreateCommentCommand::new(Uuid::nil(), &over),
            Err(CreateCommentCommandError::TextTooLong { max: 2000 })
        ));
    }
}
