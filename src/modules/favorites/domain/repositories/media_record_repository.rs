use async_trait::async_trait;

use crate::modules::favorites::domain::entities::{FavoriteIds, FavoriteRecord};
use crate::modules::media::{ImageItem, MediaItem, MediaKey};
use crate::shared::errors::AppResult;

/// Local store of favorite and cached media snapshots
#[async_trait]
pub trait MediaRecordRepository: Send + Sync {
    /// Any stored row for `key`, favorite or cached
    async fn find(&self, key: MediaKey) -> AppResult<Option<FavoriteRecord>>;

    /// Write the full snapshot and set the favorite flag (last writer wins)
    async fn save_favorite(&self, item: &MediaItem) -> AppResult<FavoriteRecord>;

    /// Clear the favorite flag. Deletes the row unless it is also a cache entry.
    /// Returns false when there was no favorite to clear.
    async fn clear_favorite(&self, key: MediaKey) -> AppResult<bool>;

    async fn favorite_ids(&self) -> AppResult<FavoriteIds>;

    /// Favorites, images first then videos, each newest first
    async fn list_favorites(&self) -> AppResult<Vec<FavoriteRecord>>;

    /// Store images as cache entries, keeping any favorite flag already set
    async fn cache_images(&self, items: &[ImageItem]) -> AppResult<usize>;

    /// Delete every row that is not a favorite; returns the number removed
    async fn purge_transient(&self) -> AppResult<usize>;
}
