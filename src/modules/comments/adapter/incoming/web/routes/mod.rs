mod create_comment;
mod delete_comment;
mod list_comments;

pub use create_comment::{__path_create_comment_handler, create_comment_handler, CreateCommentRequest};
pub use delete_comment::{__path_delete_comment_handler, delete_comment_handler};
pub use list_comments::{__path_list_comments_handler, list_comments_handler, CommentDto};
