use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::modules::media::{ContentType, MediaId, MediaKey};

/// Ids of every favorite, split by content type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteIds {
    pub images: BTreeSet<MediaId>,
    pub videos: BTreeSet<MediaId>,
}

impl FavoriteIds {
    pub fn new(
        images: impl IntoIterator<Item = MediaId>,
        videos: impl IntoIterator<Item = MediaId>,
    ) -> Self {
        Self {
            images: images.into_iter().collect(),
            videos: videos.into_iter().collect(),
        }
    }

    pub fn contains(&self, key: &MediaKey) -> bool {
        match key.content_type {
            ContentType::Image => self.images.contains(&key.id),
            ContentType::Video => self.videos.contains(&key.id),
        }
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.videos.is_empty()
    }
}
