//! Picks what to render for a stored media item.
//!
//! Pure and infallible: every combination of missing fields ends in a defined
//! result, at worst [`RenderKind::Empty`] with empty URLs.

use serde::Serialize;

use super::embed_source::{
    embed_player_url, extract_video_id, fallback_thumbnail_url, is_embed_host, thumbnail_url,
    ThumbnailQuality,
};
use super::entities::{MediaItem, MediaType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    Image,
    DirectVideo,
    Embed,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedDisplay {
    pub primary_url: String,
    pub is_embed_source: bool,
    pub video_id: Option<String>,
    pub thumbnail_url: String,
    /// Retry target when a `maxresdefault` thumbnail is missing upstream.
    pub thumbnail_fallback_url: Option<String>,
    pub render: RenderKind,
    pub embed_url: Option<String>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// First non-empty of `storage_url`, `external_url`, `thumbnail_url`.
pub fn primary_url(item: &MediaItem) -> String {
    non_empty(item.storage_url.as_ref())
        .or_else(|| non_empty(item.external_url.as_ref()))
        .or_else(|| non_empty(item.thumbnail_url.as_ref()))
        .unwrap_or_default()
        .to_string()
}

pub fn resolve(item: &MediaItem, quality: ThumbnailQuality) -> ResolvedDisplay {
    let primary = primary_url(item);
    let is_video = item.media_type == MediaType::Video;

    let is_embed_source = is_video && is_embed_host(&primary);
    let video_id = if is_embed_source {
        extract_video_id(&primary)
    } else {
        None
    };

    let thumbnail = match (&video_id, non_empty(item.thumbnail_url.as_ref())) {
        (Some(id), _) => thumbnail_url(id, quality),
        (None, Some(explicit)) if is_video => explicit.to_string(),
        _ => primary.clone(),
    };
    let thumbnail_fallback_url = fallback_thumbnail_url(&thumbnail);

    let render = if primary.is_empty() {
        RenderKind::Empty
    } else if video_id.is_some() {
        RenderKind::Embed
    } else if is_video {
        RenderKind::DirectVideo
    } else {
        RenderKind::Image
    };

    ResolvedDisplay {
        embed_url: video_id.as_deref().map(embed_player_url),
        primary_url: primary,
        is_embed_source,
        video_id,
        thumbnail_url: thumbnail,
        thumbnail_fallback_url,
        render,
    }
}
