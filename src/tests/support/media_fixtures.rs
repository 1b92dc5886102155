use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{Session, UserId, UserRole};
use crate::multimedia::application::domain::entities::{
    MediaDraft, MediaItem, MediaType, PublishStatus,
};

pub fn active_session() -> Session {
    Session {
        user_id: UserId::from(Uuid::new_v4()),
        email: Some("admin@example.com".to_string()),
        role: UserRole::Admin,
        access_token: "test-access-token".to_string(),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

pub fn member_session() -> Session {
    Session {
        role: UserRole::Member,
        email: Some("devotee@example.com".to_string()),
        ..active_session()
    }
}

/// What the store would hand back for `draft`.
pub fn item_from_draft(draft: MediaDraft) -> MediaItem {
    MediaItem {
        id: Uuid::new_v4(),
        title: draft.title,
        media_type: draft.media_type,
        storage_path: draft.storage_path,
        storage_url: draft.storage_url,
        external_url: draft.external_url,
        thumbnail_url: draft.thumbnail_url,
        description: draft.description,
        date: draft.date,
        location: draft.location,
        tags: draft.tags,
        status: draft.status,
        is_featured: draft.is_featured,
        views: 0,
        likes: 0,
        photographer: draft.photographer,
        created_at: Utc::now(),
    }
}

pub fn sample_photo(id: Uuid) -> MediaItem {
    MediaItem {
        id,
        title: "Ganga Aarti".to_string(),
        media_type: MediaType::Photo,
        storage_path: Some("1700000000000-abc123xy.jpg".to_string()),
        storage_url: Some(
            "https://proj.supabase.co/storage/v1/object/public/media/1700000000000-abc123xy.jpg"
                .to_string(),
        ),
        external_url: None,
        thumbnail_url: None,
        description: Some("Evening aarti at the ghat".to_string()),
        date: NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
        location: Some("Varanasi".to_string()),
        tags: vec!["aarti".to_string(), "ganga".to_string()],
        status: PublishStatus::Published,
        is_featured: false,
        views: 10,
        likes: 3,
        photographer: "Admin".to_string(),
        created_at: Utc::now(),
    }
}

pub fn sample_youtube_video(id: Uuid) -> MediaItem {
    MediaItem {
        id,
        title: "Kirtan".to_string(),
        media_type: MediaType::Video,
        storage_path: None,
        storage_url: None,
        external_url: Some("https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string()),
        thumbnail_url: Some(
            "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".to_string(),
        ),
        tags: vec!["kirtan".to_string()],
        ..sample_photo(id)
    }
}
