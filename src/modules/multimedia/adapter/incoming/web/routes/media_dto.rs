use actix_web::HttpResponse;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::multimedia::application::{
    domain::{
        display_resolver::{RenderKind, ResolvedDisplay},
        entities::{MediaType, PublishStatus},
    },
    ports::incoming::use_cases::MediaView,
};
use crate::shared::api::ApiResponse;

/// How a client should render the item.
#[derive(Serialize, ToSchema)]
pub struct DisplayDto {
    #[schema(example = "https://proj.supabase.co/storage/v1/object/public/media/1700000000000-abc123xy.jpg")]
    pub primary_url: String,
    pub is_embed_source: bool,
    #[schema(example = "dQw4w9WgXcQ")]
    pub video_id: Option<String>,
    pub thumbnail_url: String,
    pub thumbnail_fallback_url: Option<String>,
    #[schema(value_type = String, example = "image")]
    pub render: RenderKind,
    pub embed_url: Option<String>,
}

impl From<ResolvedDisplay> for DisplayDto {
    fn from(d: ResolvedDisplay) -> Self {
        Self {
            primary_url: d.primary_url,
            is_embed_source: d.is_embed_source,
            video_id: d.video_id,
            thumbnail_url: d.thumbnail_url,
            thumbnail_fallback_url: d.thumbnail_fallback_url,
            render: d.render,
            embed_url: d.embed_url,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MediaItemDto {
    pub id: Uuid,
    #[schema(example = "Ganga Aarti")]
    pub title: String,
    #[serde(rename = "type")]
    #[schema(value_type = String, example = "photo")]
    pub media_type: MediaType,
    pub storage_path: Option<String>,
    pub storage_url: Option<String>,
    pub external_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub tags: Vec<String>,
    #[schema(value_type = String, example = "published")]
    pub status: PublishStatus,
    pub is_featured: bool,
    pub views: i64,
    pub likes: i64,
    pub photographer: String,
    pub created_at: DateTime<Utc>,
    pub display: DisplayDto,
}

impl From<MediaView> for MediaItemDto {
    fn from(view: MediaView) -> Self {
        let item = view.item;
        Self {
            id: item.id,
            title: item.title,
            media_type: item.media_type,
            storage_path: item.storage_path,
            storage_url: item.storage_url,
            external_url: item.external_url,
            thumbnail_url: item.thumbnail_url,
            description: item.description,
            date: item.date,
            location: item.location,
            tags: item.tags,
            status: item.status,
            is_featured: item.is_featured,
            views: item.views,
            likes: item.likes,
            photographer: item.photographer,
            created_at: item.created_at,
            display: view.display.into(),
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct MediaListResponse {
    pub items: Vec<MediaItemDto>,
    pub count: usize,
}

impl MediaListResponse {
    pub fn from_views(views: Vec<MediaView>) -> Self {
        let items: Vec<MediaItemDto> = views.into_iter().map(MediaItemDto::from).collect();
        Self {
            count: items.len(),
            items,
        }
    }
}

// ============================================================================
// Parameter parsing shared by the media routes
// ============================================================================

/// `all` (or nothing) means no type filter.
pub fn parse_media_type_filter(raw: Option<&str>) -> Result<Option<MediaType>, HttpResponse> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("all") => Ok(None),
        Some(s) => s.parse::<MediaType>().map(Some).map_err(|_| {
            ApiResponse::bad_request("INVALID_MEDIA_TYPE", "type must be photo, video or all")
        }),
    }
}

pub fn parse_media_type(raw: &str) -> Result<MediaType, HttpResponse> {
    raw.parse::<MediaType>()
        .map_err(|_| ApiResponse::bad_request("INVALID_MEDIA_TYPE", "type must be photo or video"))
}

pub fn parse_status(raw: Option<&str>) -> Result<Option<PublishStatus>, HttpResponse> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s.parse::<PublishStatus>().map(Some).map_err(|_| {
            ApiResponse::bad_request("INVALID_STATUS", "status must be draft or published")
        }),
    }
}

pub fn parse_date(raw: Option<&str>) -> Result<Option<NaiveDate>, HttpResponse> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ApiResponse::bad_request("INVALID_DATE", "date must be YYYY-MM-DD")),
    }
}

/// Comma separated list; blanks are dropped.
pub fn split_tags(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
