use async_trait::async_trait;
use tracing::info;

use crate::tags::application::{
    domain::entities::Tag,
    ports::{
        incoming::use_cases::{CreateTagCommand, CreateTagError, CreateTagUseCase},
        outgoing::{TagRepository, TagRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTagUseCase for CreateTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTagCommand) -> Result<Tag, CreateTagError> {
        let tag = self
            .repository
            .create_tag(command.into_name())
            .await
            .map_err(|e| match e {
                TagRepositoryError::TagAlreadyExists => CreateTagError::TagAlreadyExists,
                other => CreateTagError::RepositoryError(other.to_string()),
            })?;

        info!("Created tag {} ({})", tag.name, tag.id);
        Ok(tag)
    }
}
