mod media_query;
mod media_repository;

pub use media_query::{MediaFilter, MediaQuery, MediaQueryError, MediaStats};
pub use media_repository::{MediaRepository, MediaRepositoryError, MediaUpdate};
