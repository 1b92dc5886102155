use async_trait::async_trait;

use crate::tags::application::domain::entities::{Tag, MAX_TAG_NAME_LEN};

//
// ──────────────────────────────────────────────────────────
// Create Tag Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTagCommand {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateTagCommandError {
    #[error("Tag name cannot be empty")]
    EmptyName,

    #[error("Tag name too long (max {max} characters)")]
    NameTooLong { max: usize },
}

impl CreateTagCommand {
    pub fn new(name: &str) -> Result<Self, CreateTagCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(CreateTagCommandError::EmptyName);
        }

        if name.chars().count() > MAX_TAG_NAME_LEN {
            return Err(CreateTagCommandError::NameTooLong {
                max: MAX_TAG_NAME_LEN,
            });
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_name(self) -> String {
        self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTagError {
    #[error("Tag already exists")]
    TagAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTagUseCase: Send + Sync {
    async fn execute(&self, command: CreateTagCommand) -> Result<Tag, CreateTagError>;
}
