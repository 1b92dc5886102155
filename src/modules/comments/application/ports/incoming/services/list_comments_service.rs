use async_trait::async_trait;
use uuid::Uuid;

use crate::comments::application::{
    domain::entities::Comment,
    ports::{
        incoming::use_cases::{ListCommentsError, ListCommentsUseCase},
        outgoing::CommentQuery,
    },
};

#[derive(Debug, Clone)]
pub struct ListCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCommentsUseCase for ListCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, media_id: Uuid) -> Result<Vec<Comment>, ListCommentsError> {
        self.query
            .list_for_media(media_id)
            .await
            .map_err(|e| ListCommentsError::QueryFailed(e.to_string()))
    }
}
