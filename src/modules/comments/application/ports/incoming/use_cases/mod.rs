mod create_comment;
mod delete_comment;
mod list_comments;

pub use create_comment::{
    CreateCommentCommand, CreateCommentCommandError, CreateCommentError, CreateCommentUseCase,
};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use list_comments::{ListCommentsError, ListCommentsUseCase};
