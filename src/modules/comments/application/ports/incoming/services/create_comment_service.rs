use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::Session;
use crate::comments::application::{
    domain::entities::{author_name_for, Comment, NewComment},
    ports::{
        incoming::use_cases::{CreateCommentCommand, CreateCommentError, CreateCommentUseCase},
        outgoing::{CommentRepository, CommentRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateCommentUseCase for CreateCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        session: &Session,
        command: CreateCommentCommand,
    ) -> Result<Comment, CreateCommentError> {
        let new_comment = NewComment {
            media_id: command.media_id(),
            user_id: session.user_id.value(),
            author_name: author_name_for(session),
            text: command.into_text(),
        };

        let comment = self
            .repository
            .create_comment(new_comment)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::MediaNotFound => CreateCommentError::MediaNotFound,
                other => CreateCommentError::RepositoryError(other.to_string()),
            })?;

        info!(
            comment_id = %comment.id,
            media_id = %comment.media_id,
            user_id = %session.user_id,
            "Comment added"
        );
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    use crate::tests::support::media_fixtures::member_session;

    #[derive(Clone)]
    struct MockCommentRepository {
        error: Option<CommentRepositoryError>,
        received: Arc<Mutex<Vec<NewComment>>>,
    }

    impl MockCommentRepository {
        fn new(error: Option<CommentRepositoryError>) -> Self {
            Self {
                error,
                received: Arc::new(Mutex::new(vec![])),
            }
        }
    }

    #[async_trait]
    impl CommentRepository for MockCommentRepository {
        async fn create_comment(
            &self,
            comment: NewComment,
        ) -> Result<Comment, CommentRepositoryError> {
            self.received.lock().unwrap().push(comment.clone());
            match &self.error {
                Some(e) => Err(e.clone()),
                None => Ok(Comment {
                    id: Uuid::new_v4(),
                    media_id: comment.media_id,
                    user_id: comment.user_id,
                    author_name: comment.author_name,
                    text: comment.text,
                    created_at: Utc::now(),
                }),
            }
        }

        async fn delete_comment(&self, _comment_id: Uuid) -> Result<(), CommentRepositoryError> {
            unimplemented!("Not used in this test")
        }
    }

    #[tokio::test]
    async fn stores_trimmed_text_under_session_user() {
        let session = member_session();
        let media_id = Uuid::new_v4();
        let repo = MockCommentRepository::new(None);
        let service = CreateCommentService::new(repo.clone());

        let comment = service
            .execute(
                &session,
                CreateCommentCommand::new(media_id, "  Radhe Radhe ").unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(comment.text, "Radhe Radhe");
        assert_eq!(comment.author_name, "devotee");

        let received = repo.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].media_id, media_id);
        assert_eq!(received[0].user_id, session.user_id.value());
    }

    #[tokio::test]
    async fn unknown_media_is_reported() {
        let service =
            CreateCommentService::new(MockCommentRepository::new(Some(CommentRepositoryError::MediaNotFound)));

        let result = service
            .execute(
                &member_session(),
                CreateCommentCommand::new(Uuid::new_v4(), "hello").unwrap(),
            )
            .await;
        assert!(matches!(result, Err(CreateCommentError::MediaNotFound)));
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let service = CreateCommentService::new(MockCommentRepository::new(Some(
            CommentRepositoryError::DatabaseError("connection lost".into()),
        )));

        match service
            .execute(
                &member_session(),
                CreateCommentCommand::new(Uuid::new_v4(), "hello").unwrap(),
            )
            .await
        {
            Err(CreateCommentError::RepositoryError(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }
}
