//! Recognition of third-party video hosts (YouTube) and the URLs derived from
//! their video identifiers.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

const EMBED_HOSTS: [&str; 2] = ["youtube.com", "youtu.be"];

// watch (?v= / &v=), youtu.be/ID, /embed/ID, /shorts/ID, /v/ID, /e/ID
static RE_VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?|shorts)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("video id pattern compiles")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailQuality {
    /// Carousel and detail backdrops.
    MaxRes,
    /// Small thumbnail strips and grid cards.
    High,
}

impl ThumbnailQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailQuality::MaxRes => "maxresdefault",
            ThumbnailQuality::High => "hqdefault",
        }
    }
}

impl fmt::Display for ThumbnailQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Plain substring match on the two recognized hosts.
pub fn is_embed_host(url: &str) -> bool {
    EMBED_HOSTS.iter().any(|host| url.contains(host))
}

pub fn extract_video_id(url: &str) -> Option<String> {
    RE_VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn thumbnail_url(video_id: &str, quality: ThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{}/{}.jpg", video_id, quality)
}

/// The single retry a renderer performs when `maxresdefault` does not exist.
/// Returns `None` for URLs that are not max-res thumbnails.
pub fn fallback_thumbnail_url(url: &str) -> Option<String> {
    let max_res = ThumbnailQuality::MaxRes.as_str();
    if url.contains(max_res) {
        Some(url.replacen(max_res, ThumbnailQuality::High.as_str(), 1))
    } else {
        None
    }
}

pub fn embed_player_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&mute=1&rel=0&playsinline=1",
        video_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "abcdefghijk";

    #[test]
    fn extracts_id_from_all_url_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=abcdefghijk",
            "https://youtu.be/abcdefghijk",
            "https://www.youtube.com/embed/abcdefghijk",
            "https://www.youtube.com/shorts/abcdefghijk",
            "https://m.youtube.com/watch?feature=share&v=abcdefghijk",
            "https://www.youtube.com/v/abcdefghijk",
            "https://youtu.be/abcdefghijk?t=42",
            "https://www.youtube.com/watch?v=abcdefghijk&list=PL123",
        ];

        for url in urls {
            assert_eq!(extract_video_id(url).as_deref(), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn extraction_is_idempotent() {
        let url = "https://youtu.be/abcdefghijk";
        assert_eq!(extract_video_id(url), extract_video_id(url));
    }

    #[test]
    fn no_id_for_short_or_foreign_urls() {
        assert_eq!(extract_video_id("https://youtu.be/short"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/"), None);
        assert_eq!(extract_video_id("https://vimeo.com/123456789012"), None);
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn embed_host_is_substring_match() {
        assert!(is_embed_host("https://www.youtube.com/shorts/x"));
        assert!(is_embed_host("youtu.be/x"));
        assert!(is_embed_host("https://example.com/?ref=youtube.com"));
        assert!(!is_embed_host("https://example.com/video.mp4"));
    }

    #[test]
    fn builds_thumbnail_urls() {
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::MaxRes),
            "https://img.youtube.com/vi/abcdefghijk/maxresdefault.jpg"
        );
        assert_eq!(
            thumbnail_url(ID, ThumbnailQuality::High),
            "https://img.youtube.com/vi/abcdefghijk/hqdefault.jpg"
        );
    }

    #[test]
    fn fallback_swaps_maxres_in_place() {
        let url = thumbnail_url(ID, ThumbnailQuality::MaxRes);
        assert_eq!(
            fallback_thumbnail_url(&url).as_deref(),
            Some("https://img.youtube.com/vi/abcdefghijk/hqdefault.jpg")
        );
        assert_eq!(
            fallback_thumbnail_url("https://img.youtube.com/vi/abcdefghijk/hqdefault.jpg"),
            None
        );
    }

    #[test]
    fn embed_player_url_has_autoplay_flags() {
        assert_eq!(
            embed_player_url(ID),
            "https://www.youtube.com/embed/abcdefghijk?autoplay=1&mute=1&rel=0&playsinline=1"
        );
    }
}
