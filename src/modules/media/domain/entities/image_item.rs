use serde::{Deserialize, Serialize};

use crate::modules::media::domain::value_objects::{MediaId, MediaKey};

/// An image search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageItem {
    pub id: MediaId,
    /// Comma separated, as delivered by the API
    pub tags: String,
    /// Small thumbnail (about 150px)
    pub preview_url: Option<String>,
    /// Medium size suited for list cells (about 640px)
    pub web_format_url: Option<String>,
    /// Large or original resolution
    pub full_url: Option<String>,
    pub user: String,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    /// photo, illustration or vector
    pub kind: String,
}

impl ImageItem {
    pub fn new(id: MediaId, tags: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            id,
            tags: tags.into(),
            preview_url: None,
            web_format_url: None,
            full_url: None,
            user: user.into(),
            views: 0,
            downloads: 0,
            likes: 0,
            kind: "photo".to_string(),
        }
    }

    /// Set candidate URLs (thumbnail, list size, full resolution)
    pub fn with_urls(
        mut self,
        preview_url: Option<String>,
        web_format_url: Option<String>,
        full_url: Option<String>,
    ) -> Self {
        self.preview_url = preview_url;
        self.web_format_url = web_format_url;
        self.full_url = full_url;
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
        MediaKey::image(self.id)
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.preview_url
            .as_deref()
            .or(self.web_format_url.as_deref())
    }

    pub fn content_url(&self) -> Option<&str> {
        self.full_url.as_deref().or(self.web_format_url.as_deref())
    }
}
