mod media_query_postgres;
mod media_repository_postgres;
pub mod sea_orm_entity;

pub use media_query_postgres::MediaQueryPostgres;
pub use media_repository_postgres::MediaRepositoryPostgres;
