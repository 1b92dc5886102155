use std::sync::Arc;

use crate::comments::application::ports::incoming::use_cases::{
    CreateCommentUseCase, DeleteCommentUseCase, ListCommentsUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub list: Arc<dyn ListCommentsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateCommentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}
