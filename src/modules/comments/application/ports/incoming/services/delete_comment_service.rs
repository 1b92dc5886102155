use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::Session;
use crate::comments::application::ports::{
    incoming::use_cases::{DeleteCommentError, DeleteCommentUseCase},
    outgoing::{CommentQuery, CommentRepository, CommentRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, session: &Session, comment_id: Uuid) -> Result<(), DeleteCommentError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| DeleteCommentError::DatabaseError(e.to_string()))?
            .ok_or(DeleteCommentError::CommentNotFound)?;

        if comment.user_id != session.user_id.value() {
            warn!(
                comment_id = %comment_id,
                user_id = %session.user_id,
                "Refused to delete another user's comment"
            );
            return Err(DeleteCommentError::NotOwner);
        }

        self.repository
            .delete_comment(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::CommentNotFound => DeleteCommentError::CommentNotFound,
                other => DeleteCommentError::DatabaseError(other.to_string()),
            })?;

        info!("Deleted comment {}", comment_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::{mock, predicate::eq};

    use crate::comments::application::{
        domain::entities::{Comment, NewComment},
        ports::outgoing::CommentQueryError,
    };
    use crate::tests::support::media_fixtures::member_session;

    mock! {
        pub CommentQueryMock {}
        #[async_trait]
        impl CommentQuery for CommentQueryMock {
            async fn list_for_media(&self, media_id: Uuid) -> Result<Vec<Comment>, CommentQueryError>;
            async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentQueryError>;
        }
    }

    mock! {
        pub CommentRepositoryMock {}
        #[async_trait]
        impl CommentRepository for CommentRepositoryMock {
            async fn create_comment(&self, comment: NewComment) -> Result<Comment, CommentRepositoryError>;
            async fn delete_comment(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
        }
    }

    fn comment_by(id: Uuid, user_id: Uuid) -> Comment {
        Comment {
            id,
            media_id: Uuid::new_v4(),
            user_id,
            author_name: "devotee".into(),
            text: "Hare Krishna".into(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn author_can_delete() {
        let session = member_session();
        let owner = session.user_id.value();
        let id = Uuid::new_v4();

        let mut query = MockCommentQueryMock::new();
        query
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |id| Ok(Some(comment_by(id, owner))));
        let mut repo = MockCommentRepositoryMock::new();
        repo.expect_delete_comment()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let service = DeleteCommentService::new(query, repo);
        assert!(service.execute(&session, id).await.is_ok());
    }

    #[tokio::test]
    async fn other_user_is_refused_without_delete() {
        let mut query = MockCommentQueryMock::new();
        query
            .expect_find_by_id()
            .returning(|id| Ok(Some(comment_by(id, Uuid::new_v4()))));
        let mut repo = MockCommentRepositoryMock::new();
        repo.expect_delete_comment().times(0);

        let service = DeleteCommentService::new(query, repo);
        let result = service.execute(&member_session(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteCommentError::NotOwner)));
    }

    #[tokio::test]
    async fn missing_comment_is_not_found() {
        let mut query = MockCommentQueryMock::new();
        query.expect_find_by_id().returning(|_| Ok(None));
        let mut repo = MockCommentRepositoryMock::new();
        repo.expect_delete_comment().times(0);

        let service = DeleteCommentService::new(query, repo);
        let result = service.execute(&member_session(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteCommentError::CommentNotFound)));
    }

    #[tokio::test]
    async fn comment_gone_between_lookup_and_delete() {
        let session = member_session();
        let owner = session.user_id.value();

        let mut query = MockCommentQueryMock::new();
        query
            .expect_find_by_id()
            .returning(move |id| Ok(Some(comment_by(id, owner))));
        let mut repo = MockCommentRepositoryMock::new();
        repo.expect_delete_comment()
            .returning(|_| Err(CommentRepositoryError::CommentNotFound));

        let service = DeleteCommentService::new(query, repo);
        let result = service.execute(&session, Uuid::new_v4()).await;
        assert!(matches!(result, Err(DeleteCommentError::CommentNotFound)));
    }
}
