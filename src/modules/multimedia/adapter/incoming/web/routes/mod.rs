mod admin_media;
mod get_media;
mod ingest_support;
mod like_media;
mod list_media;
mod media_dto;
mod media_stats;
mod submission_progress;
mod submit_link;
mod upload_media;

pub use admin_media::{
    __path_admin_list_media_handler, __path_delete_media_handler, __path_update_media_handler,
    admin_list_media_handler, delete_media_handler, update_media_handler, AdminListMediaParams,
    DeleteMediaResponse, UpdateMediaRequest,
};
pub use get_media::{__path_get_media_handler, get_media_handler};
pub use ingest_support::{IngestResponse, SUBMISSION_ID_HEADER};
pub use like_media::{__path_like_media_handler, like_media_handler, LikeResponse};
pub use list_media::{__path_list_media_handler, list_media_handler, ListMediaParams};
pub use media_dto::{DisplayDto, MediaItemDto, MediaListResponse};
pub use media_stats::{__path_media_stats_handler, media_stats_handler, MediaStatsResponse};
pub use submission_progress::{
    __path_submission_progress_handler, submission_progress_handler, SubmissionProgressResponse,
};
pub use submit_link::{__path_submit_link_handler, submit_link_handler, SubmitLinkRequest};
pub use upload_media::{__path_upload_media_handler, upload_media_handler, UploadMediaForm};
