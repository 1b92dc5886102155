use std::sync::Arc;

use crate::multimedia::application::ports::incoming::use_cases::{
    AdminListMediaUseCase, DeleteMediaUseCase, GetMediaUseCase, IngestMediaUseCase,
    LikeMediaUseCase, ListMediaUseCase, MediaStatsUseCase, SubmissionProgressUseCase,
    UpdateMediaUseCase,
};

#[derive(Clone)]
pub struct MultimediaUseCases {
    pub ingest: Arc<dyn IngestMediaUseCase + Send + Sync>,
    pub submission_progress: Arc<dyn SubmissionProgressUseCase + Send + Sync>,
    pub list: Arc<dyn ListMediaUseCase + Send + Sync>,
    pub admin_list: Arc<dyn AdminListMediaUseCase + Send + Sync>,
    pub get: Arc<dyn GetMediaUseCase + Send + Sync>,
    pub like: Arc<dyn LikeMediaUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateMediaUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMediaUseCase + Send + Sync>,
    pub stats: Arc<dyn MediaStatsUseCase + Send + Sync>,
}
