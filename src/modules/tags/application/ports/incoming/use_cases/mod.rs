mod create_tag;
mod delete_tag;
mod list_tags;

pub use create_tag::{CreateTagCommand, CreateTagCommandError, CreateTagError, CreateTagUseCase};
pub use delete_tag::{DeleteTagError, DeleteTagUseCase};
pub use list_tags::{ListTagsError, ListTagsUseCase};
