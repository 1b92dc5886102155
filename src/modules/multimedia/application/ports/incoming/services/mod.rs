mod get_media_service;
mod ingest_media_service;
mod like_media_service;
mod list_media_service;
mod manage_media_service;
mod media_stats_service;

pub use get_media_service::GetMediaService;
pub use ingest_media_service::IngestMediaService;
pub use like_media_service::LikeMediaService;
pub use list_media_service::ListMediaService;
pub use manage_media_service::{DeleteMediaService, UpdateMediaService};
pub use media_stats_service::MediaStatsService;
