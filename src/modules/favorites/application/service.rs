use std::sync::Arc;
use tokio::sync::{watch, Mutex};

use crate::modules::favorites::domain::{FavoriteIds, FavoriteRecord, MediaRecordRepository};
use crate::modules::media::{ImageItem, MediaItem, MediaKey};
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_info};

/// Favorites store: the user's saved items plus the transient search cache
///
/// Every write refreshes a live view of favorite ids that screens can
/// subscribe to with [`FavoritesService::watch_favorite_ids`].
pub struct FavoritesService {
    repository: Arc<dyn MediaRecordRepository>,
    ids: watch::Sender<FavoriteIds>,
    // Serialises read-modify-write sequences such as toggling
    write_lock: Mutex<()>,
}

impl FavoritesService {
    pub fn new(repository: Arc<dyn MediaRecordRepository>) -> Self {
        let (ids, _) = watch::channel(FavoriteIds::default());
        Self {
            repository,
            ids,
            write_lock: Mutex::new(()),
        }
    }

    /// Create the service and load the current favorite ids
    pub async fn initialize(repository: Arc<dyn MediaRecordRepository>) -> AppResult<Self> {
        let service = Self::new(repository);
        service.refresh_ids().await?;
        log_info!(
            "Favorites store ready ({} favorite(s))",
            service.ids.borrow().len()
        );
        Ok(service)
    }

    /// Mark or unmark `item` as favorite
    pub async fn set_favorite(&self, item: &MediaItem, favorite: bool) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        self.write_flag(item, favorite).await
    }

    /// Flip the persisted favorite flag of `item` and return the new value
    pub async fn toggle_favorite(&self, item: &MediaItem) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;

        let key = item.key();
        key.validate()?;
        let favorite = !self.is_favorite(key).await?;
        self.write_flag(item, favorite).await?;

        Ok(favorite)
    }

    async fn write_flag(&self, item: &MediaItem, favorite: bool) -> AppResult<()> {
        let key = item.key();
        key.validate()?;

        if favorite {
            self.repository.save_favorite(item).await?;
        } else {
            self.repository.clear_favorite(key).await?;
        }

        LogContext::favorite_change(key, favorite);
        self.refresh_ids().await
    }

    pub async fn is_favorite(&self, key: MediaKey) -> AppResult<bool> {
        Ok(self
            .repository
            .find(key)
            .await?
            .map(|record| record.is_favorite)
            .unwrap_or(false))
    }

    /// Stored row for `key`, favorite or cached
    pub async fn get_record(&self, key: MediaKey) -> AppResult<Option<FavoriteRecord>> {
        key.validate()?;
        self.repository.find(key).await
    }

    /// Current favorite ids (from the live view, no database round trip)
    pub fn favorite_ids(&self) -> FavoriteIds {
        self.ids.borrow().clone()
    }

    pub fn watch_favorite_ids(&self) -> watch::Receiver<FavoriteIds> {
        self.ids.subscribe()
    }

    pub async fn list_favorites(&self) -> AppResult<Vec<FavoriteRecord>> {
        self.repository.list_favorites().await
    }

    /// Unmark a favorite by key; returns false when it was not a favorite
    pub async fn remove_favorite(&self, key: MediaKey) -> AppResult<bool> {
        let _guard = self.write_lock.lock().await;
        key.validate()?;

        let removed = self.repository.clear_favorite(key).await?;
        if removed {
            LogContext::favorite_change(key, false);
            self.refresh_ids().await?;
        }

        Ok(removed)
    }

    /// Keep search results around as transient cache entries
    pub async fn cache_images(&self, items: &[ImageItem]) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        self.repository.cache_images(items).await
    }

    /// Drop every stored row that is not a favorite
    pub async fn purge_transient(&self) -> AppResult<usize> {
        let _guard = self.write_lock.lock().await;
        let removed = self.repository.purge_transient().await?;
        log_info!("Purged {} transient cache entries", removed);
        Ok(removed)
    }

    async fn refresh_ids(&self) -> AppResult<()> {
        let ids = self.repository.favorite_ids().await?;
        log_debug!("Favorite ids refreshed ({} total)", ids.len());
        self.ids.send_replace(ids);
        Ok(())
    }
}
