use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Photo,
    Video,
}

impl MediaType {
    /// `image/*` is a photo, anything else is treated as video.
    pub fn from_content_type(content_type: &str) -> Self {
        if content_type
            .trim()
            .to_ascii_lowercase()
            .starts_with("image/")
        {
            MediaType::Photo
        } else {
            MediaType::Video
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown value: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for MediaType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "photo" => Ok(MediaType::Photo),
            "video" => Ok(MediaType::Video),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublishStatus {
    Draft,
    #[default]
    Published,
}

impl PublishStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishStatus::Draft => "draft",
            PublishStatus::Published => "published",
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PublishStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(PublishStatus::Draft),
            "published" => Ok(PublishStatus::Published),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Persisted gallery entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub storage_path: Option<String>,
    pub storage_url: Option<String>,
    pub external_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub status: PublishStatus,
    pub is_featured: bool,
    pub views: i64,
    pub likes: i64,
    pub photographer: String,
    pub created_at: DateTime<Utc>,
}

/// Metadata shared by every record produced from one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedMetadata {
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub status: PublishStatus,
    pub is_featured: bool,
}

/// A record ready to be inserted; `id`, counters and `created_at` come from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaDraft {
    pub title: String,
    pub media_type: MediaType,
    pub storage_path: Option<String>,
    pub storage_url: Option<String>,
    pub external_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub location: Option<String>,
    pub tags: Vec<String>,
    pub status: PublishStatus,
    pub is_featured: bool,
    pub photographer: String,
}

impl MediaDraft {
    pub const DEFAULT_PHOTOGRAPHER: &'static str = "Admin";

    pub fn from_metadata(meta: &SharedMetadata, title: String, media_type: MediaType) -> Self {
        Self {
            title,
            media_type,
            storage_path: None,
            storage_url: None,
            external_url: None,
            thumbnail_url: None,
            description: meta.description.clone(),
            date: meta.date,
            location: meta.location.clone(),
            tags: meta.tags.clone(),
            status: meta.status,
            is_featured: meta.is_featured,
            photographer: Self::DEFAULT_PHOTOGRAPHER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_prefix_decides_media_type() {
        assert_eq!(MediaType::from_content_type("image/jpeg"), MediaType::Photo);
        assert_eq!(MediaType::from_content_type("IMAGE/PNG"), MediaType::Photo);
        assert_eq!(MediaType::from_content_type("video/mp4"), MediaType::Video);
        assert_eq!(
            MediaType::from_content_type("application/octet-stream"),
            MediaType::Video
        );
        assert_eq!(MediaType::from_content_type(""), MediaType::Video);
    }

    #[test]
    fn parses_enums_case_insensitively() {
        assert_eq!("Photo".parse::<MediaType>().unwrap(), MediaType::Photo);
        assert_eq!(
            " draft ".parse::<PublishStatus>().unwrap(),
            PublishStatus::Draft
        );
        assert!("audio".parse::<MediaType>().is_err());
        assert!("archived".parse::<PublishStatus>().is_err());
    }

    #[test]
    fn media_item_serializes_type_field() {
        let item = MediaItem {
            id: Uuid::nil(),
            title: "Aarti".to_string(),
            media_type: MediaType::Video,
            storage_path: None,
            storage_url: None,
            external_url: Some("https://youtu.be/abcdefghijk".to_string()),
            thumbnail_url: None,
            description: None,
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            location: None,
            tags: vec![],
            status: PublishStatus::Published,
            is_featured: false,
            views: 0,
            likes: 0,
            photographer: "Admin".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["status"], "published");
    }
}
