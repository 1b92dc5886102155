mod create_tag;
mod delete_tag;
mod list_tags;

pub use create_tag::{__path_create_tag_handler, create_tag_handler, CreateTagRequest};
pub use delete_tag::{__path_delete_tag_handler, delete_tag_handler};
pub use list_tags::{__path_list_tags_handler, list_tags_handler, TagDto};
