use serde::{Deserialize, Serialize};

use crate::modules::media::{MediaItem, MediaKey};

/// Where a detail screen's content came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailSource {
    /// Saved favorite, available offline
    Local,
    /// Fetched from the media API
    Remote,
    /// Transient search-cache row used because the API was unreachable
    Cache,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailContent {
    pub item: MediaItem,
    pub is_favorite: bool,
    pub source: DetailSource,
}

impl DetailContent {
    pub fn new(item: MediaItem, is_favorite: bool, source: DetailSource) -> Self {
        Self {
            item,
            is_favorite,
            source,
        }
    }

    pub fn key(&self) -> MediaKey {
        self.item.key()
    }
}
