use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::media::{MediaItem, MediaKey};

/// A locally persisted media snapshot
///
/// A record exists because the user marked it as favorite, because the
/// search-result cache kept it, or both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRecord {
    pub item: MediaItem,
    pub is_favorite: bool,
    /// Retained as a transient search-cache entry
    pub is_cached: bool,
    /// When the row was first stored (UTC)
    pub saved_at: NaiveDateTime,
    /// When the user marked it as favorite; `None` unless `is_favorite`
    pub favorited_at: Option<NaiveDateTime>,
}

impl FavoriteRecord {
    pub fn key(&self) -> MediaKey {
        self.item.key()
    }

    /// Rows that are neither favorite nor cached must not be kept
    pub fn should_retain(&self) -> bool {
        self.is_favorite || self.is_cached
    }
}
