use serde::{Deserialize, Serialize};

use crate::modules::media::domain::value_objects::{MediaId, MediaKey};

/// A video search result, reduced to the rendition chosen for playback
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: MediaId,
    pub tags: String,
    pub video_url: String,
    pub thumbnail_url: String,
    /// Pixabay page for the video (attribution link)
    pub page_url: String,
    pub user: String,
    /// Seconds
    pub duration: i64,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    /// film or animation
    pub kind: String,
}

impl VideoItem {
    pub fn new(
        id: MediaId,
        tags: impl Into<String>,
        user: impl Into<String>,
        video_url: impl Into<String>,
        thumbnail_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            tags: tags.into(),
            video_url: video_url.into(),
            thumbnail_url: thumbnail_url.into(),
            page_url: String::new(),
            user: user.into(),
            duration: 0,
            views: 0,
            downloads: 0,
            likes: 0,
            kind: "film".to_string(),
        }
    }

    pub fn with_page_url(mut self, page_url: impl Into<String>) -> Self {
        self.page_url = page_url.into();
        self
    }

    pub fn with_duration(mut self, seconds: i64) -> Self {
        self.duration = seconds;
        self
    }

    /// Set engagement counters
    pub fn with_stats(mut self, views: i64, downloads: i64, likes: i64) -> Self {
        self.views = views;
        self.downloads = downloads;
        self.likes = likes;
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn key(&self) -> MediaKey {
        MediaKey::video(self.id)
    }
}
