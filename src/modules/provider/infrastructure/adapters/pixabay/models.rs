// Pixabay API wire models
// Based on https://pixabay.com/api/docs/

use serde::{Deserialize, Serialize};

// Response envelope shared by the image and video endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixabayResponse<T> {
    pub total: u64,
    pub total_hits: u64,
    #[serde(default = "Vec::new")]
    pub hits: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageHit {
    pub id: i64,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "previewURL", default)]
    pub preview_url: Option<String>,
    #[serde(rename = "webformatURL", default)]
    pub webformat_url: Option<String>,
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: Option<String>,
    /// Only present for accounts with full API access
    #[serde(rename = "imageURL", default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub downloads: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub user: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoHit {
    pub id: i64,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub duration: i64,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    pub videos: VideoRenditions,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub downloads: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub user: String,
}

/// Encoded sizes of one video. Pixabay leaves `url` empty for sizes it
/// did not render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRenditions {
    #[serde(default)]
    pub large: Option<VideoRendition>,
    #[serde(default)]
    pub medium: Option<VideoRendition>,
    #[serde(default)]
    pub small: Option<VideoRendition>,
    #[serde(default)]
    pub tiny: Option<VideoRendition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRendition {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub thumbnail: String,
}

impl VideoRendition {
    pub fn is_available(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

impl VideoRenditions {
    /// Largest rendition that actually has a URL
    pub fn best(&self) -> Option<&VideoRendition> {
        [&self.large, &self.medium, &self.small, &self.tiny]
            .into_iter()
            .flatten()
            .find(|rendition| rendition.is_available())
    }
}
