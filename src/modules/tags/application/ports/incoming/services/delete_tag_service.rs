use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::tags::application::ports::{
    incoming::use_cases::{DeleteTagError, DeleteTagUseCase},
    outgoing::{TagRepository, TagRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTagUseCase for DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, tag_id: Uuid) -> Result<(), DeleteTagError> {
        self.repository
            .delete_tag(tag_id)
            .await
            .map_err(|e| match e {
                TagRepositoryError::TagNotFound => DeleteTagError::TagNotFound,
                other => DeleteTagError::DatabaseError(other.to_string()),
            })?;

        info!("Deleted tag {}", tag_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{mock, predicate::eq};

    use crate::tags::application::domain::entities::Tag;

    mock! {
        pub TagRepositoryMock {}
        #[async_trait]
        impl TagRepository for TagRepositoryMock {
            async fn create_tag(&self, name: String) -> Result<Tag, TagRepositoryError>;
            async fn delete_tag(&self, tag_id: Uuid) -> Result<(), TagRepositoryError>;
        }
    }

    #[tokio::test]
    async fn deletes_by_id() {
        let id = Uuid::new_v4();
        let mut repo = MockTagRepositoryMock::new();
        repo.expect_delete_tag()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        assert!(DeleteTagService::new(repo).execute(id).await.is_ok());
    }

    #[tokio::test]
    async fn missing_tag_is_not_found() {
        let mut repo = MockTagRepositoryMock::new();
        repo.expect_delete_tag()
            .returning(|_| Err(TagRepositoryError::TagNotFound));

        let result = DeleteTagService::new(repo).execute(Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteTagError::TagNotFound)));
    }
}
