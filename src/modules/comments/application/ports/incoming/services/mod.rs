mod create_comment_service;
mod delete_comment_service;
mod list_comments_service;

pub use create_comment_service::CreateCommentService;
pub use delete_comment_service::DeleteCommentService;
pub use list_comments_service::ListCommentsService;
