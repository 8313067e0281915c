use serde::{Deserialize, Serialize};

use super::{ImageItem, VideoItem};
use crate::modules::media::domain::value_objects::{ContentType, MediaId, MediaKey};

/// Anything carrying a per-type media identifier (used for de-duplication)
pub trait Identified {
    fn media_id(&self) -> MediaId;
}

impl Identified for ImageItem {
    fn media_id(&self) -> MediaId {
        self.id
    }
}

impl Identified for VideoItem {
    fn media_id(&self) -> MediaId {
        self.id
    }
}

/// A remote search result of either content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Image(ImageItem),
    Video(VideoItem),
}

impl MediaItem {
    pub fn id(&self) -> MediaId {
        match self {
            MediaItem::Image(image) => image.id,
            MediaItem::Video(video) => video.id,
        }
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            MediaItem::Image(_) => ContentType::Image,
            MediaItem::Video(_) => ContentType::Video,
        }
    }

    pub fn key(&self) -> MediaKey {
        MediaKey::new(self.content_type(), self.id())
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        match self {
            MediaItem::Image(image) => image.thumbnail_url(),
            MediaItem::Video(video) => Some(video.thumbnail_url.as_str()),
        }
    }

    pub fn content_url(&self) -> Option<&str> {
        match self {
            MediaItem::Image(image) => image.content_url(),
            MediaItem::Video(video) => Some(video.video_url.as_str()),
        }
    }

    pub fn tags(&self) -> &str {
        match self {
            MediaItem::Image(image) => &image.tags,
            MediaItem::Video(video) => &video.tags,
        }
    }

    /// Tags split into individual words, blanks dropped
    pub fn tag_list(&self) -> Vec<String> {
        self.tags()
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn user(&self) -> &str {
        match self {
            MediaItem::Image(image) => &image.user,
            MediaItem::Video(video) => &video.user,
        }
    }

    pub fn views(&self) -> i64 {
        match self {
            MediaItem::Image(image) => image.views,
            MediaItem::Video(video) => video.views,
        }
    }

    pub fn downloads(&self) -> i64 {
        match self {
            MediaItem::Image(image) => image.downloads,
            MediaItem::Video(video) => video.downloads,
        }
    }

    pub fn likes(&self) -> i64 {
        match self {
            MediaItem::Image(image) => image.likes,
            MediaItem::Video(video) => video.likes,
        }
    }
}

impl Identified for MediaItem {
    fn media_id(&self) -> MediaId {
        self.id()
    }
}

impl From<ImageItem> for MediaItem {
    fn from(image: ImageItem) -> Self {
        MediaItem::Image(image)
    }
}

impl From<VideoItem> for MediaItem {
    fn from(video: VideoItem) -> Self {
        MediaItem::Video(video)
    }
}
