use async_trait::async_trait;
use serde::Serialize;

use crate::multimedia::application::{
    domain::{
        display_resolver::{resolve, ResolvedDisplay},
        embed_source::ThumbnailQuality,
        entities::{MediaItem, MediaType, PublishStatus},
    },
    ports::outgoing::db::MediaFilter,
};

pub const DEFAULT_LIST_LIMIT: u64 = 50;
pub const DEFAULT_FEATURED_LIMIT: u64 = 10;
pub const MAX_LIST_LIMIT: u64 = 100;

/// A stored item together with how it should be displayed.
#[derive(Debug, Clone, Serialize)]
pub struct MediaView {
    #[serde(flatten)]
    pub item: MediaItem,
    pub display: ResolvedDisplay,
}

impl MediaView {
    pub fn new(item: MediaItem, quality: ThumbnailQuality) -> Self {
        let display = resolve(&item, quality);
        Self { item, display }
    }
}

/// Public gallery listing. Only published items are ever returned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListMediaQuery {
    pub media_type: Option<MediaType>,
    pub tags: Vec<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
    pub limit: Option<u64>,
}

impl ListMediaQuery {
    pub fn is_featured_strip(&self) -> bool {
        self.featured == Some(true)
    }

    pub fn to_filter(&self) -> MediaFilter {
        let default_limit = if self.is_featured_strip() {
            DEFAULT_FEATURED_LIMIT
        } else {
            DEFAULT_LIST_LIMIT
        };

        MediaFilter {
            status: Some(PublishStatus::Published),
            media_type: self.media_type,
            tags: self
                .tags
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            featured: self.featured,
            search: normalize_search(self.search.as_deref()),
            limit: clamp_limit(self.limit, default_limit),
        }
    }
}

/// Admin console listing; drafts included.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminListMediaQuery {
    pub status: Option<PublishStatus>,
    pub search: Option<String>,
    pub limit: Option<u64>,
}

impl AdminListMediaQuery {
    pub fn to_filter(&self) -> MediaFilter {
        MediaFilter {
            status: self.status,
            search: normalize_search(self.search.as_deref()),
            limit: clamp_limit(self.limit, MAX_LIST_LIMIT),
            ..MediaFilter::default()
        }
    }
}

fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn clamp_limit(requested: Option<u64>, default: u64) -> u64 {
    requested.unwrap_or(default).clamp(1, MAX_LIST_LIMIT)
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListMediaError {
    #[error("Failed to fetch media: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListMediaUseCase: Send + Sync {
    async fn execute(&self, query: ListMediaQuery) -> Result<Vec<MediaView>, ListMediaError>;
}

#[async_trait]
pub trait AdminListMediaUseCase: Send + Sync {
    async fn execute(&self, query: AdminListMediaQuery) -> Result<Vec<MediaView>, ListMediaError>;
}
