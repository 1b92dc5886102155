mod get_media;
mod ingest_media;
mod like_media;
mod list_media;
mod manage_media;
mod media_stats;
mod submission_progress;

pub use get_media::{GetMediaError, GetMediaUseCase};
pub use ingest_media::{
    normalize_tags, IncomingFile, IngestCommandError, IngestMediaCommand,
    IngestMediaCommandBuilder, IngestMediaError, IngestMediaUseCase, IngestResult, IngestSource,
};
pub use like_media::{LikeMediaError, LikeMediaUseCase, LikeOutcome};
pub use list_media::{
    AdminListMediaQuery, AdminListMediaUseCase, ListMediaError, ListMediaQuery, ListMediaUseCase,
    MediaView, DEFAULT_FEATURED_LIMIT, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT,
};
pub use manage_media::{
    status_change, DeleteMediaError, DeleteMediaOutcome, DeleteMediaUseCase, UpdateMediaCommand,
    UpdateMediaCommandError, UpdateMediaError, UpdateMediaUseCase,
};
pub use media_stats::{MediaStatsError, MediaStatsUseCase};
pub use submission_progress::{
    SubmissionProgress, SubmissionProgressError, SubmissionProgressUseCase,
};
