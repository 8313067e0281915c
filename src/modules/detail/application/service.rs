use std::sync::Arc;

use super::favorite_flag::FavoriteFlag;
use crate::modules::detail::domain::{DetailContent, DetailSource};
use crate::modules::favorites::FavoritesService;
use crate::modules::media::{ContentType, MediaItem, MediaKey};
use crate::modules::provider::MediaProviderRepository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::TimedOperation;
use crate::{log_debug, log_info, log_warn};

/// Resolves the content of a detail screen
///
/// Favorites are served from the local store so they stay available offline.
/// Anything else is fetched by id; a transient cache row is only used when
/// the API cannot be reached. Nothing is persisted here.
pub struct DetailService {
    provider: Arc<dyn MediaProviderRepository>,
    favorites: Arc<FavoritesService>,
}

impl DetailService {
    pub fn new(
        provider: Arc<dyn MediaProviderRepository>,
        favorites: Arc<FavoritesService>,
    ) -> Self {
        Self {
            provider,
            favorites,
        }
    }

    pub async fn get_detail(&self, key: MediaKey) -> AppResult<DetailContent> {
        key.validate()?;
        let timer = TimedOperation::new(format!("Detail {}", key));

        let cached = match self.favorites.get_record(key).await? {
            Some(record) if record.is_favorite => {
                log_debug!("Detail: {} served from favorites", key);
                timer.finish("served from favorites");
                return Ok(DetailContent::new(record.item, true, DetailSource::Local));
            }
            other => other,
        };

        match self.fetch_remote(key).await {
            Ok(Some(item)) => {
                timer.finish("fetched remotely");
                Ok(DetailContent::new(item, false, DetailSource::Remote))
            }
            Ok(None) => {
                log_info!("Detail: {} does not exist", key);
                Err(AppError::NotFound(Self::describe(key)))
            }
            Err(err) if err.is_transport() => match cached {
                Some(record) => {
                    log_warn!("Detail: {} unreachable ({}), using cached copy", key, err);
                    Ok(DetailContent::new(record.item, false, DetailSource::Cache))
                }
                None => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    /// Toggle the favorite flag of the item behind `key`; returns the new flag
    pub async fn toggle_favorite(&self, key: MediaKey) -> AppResult<bool> {
        let detail = self.get_detail(key).await?;
        self.favorites.toggle_favorite(&detail.item).await
    }

    /// Live favorite flag for a detail screen
    pub fn watch_is_favorite(&self, key: MediaKey) -> FavoriteFlag {
        FavoriteFlag::new(key, self.favorites.watch_favorite_ids())
    }

    async fn fetch_remote(&self, key: MediaKey) -> AppResult<Option<MediaItem>> {
        let item = match key.content_type {
            ContentType::Image => self
                .provider
                .get_image_by_id(key.id)
                .await?
                .map(MediaItem::from),
            ContentType::Video => self
                .provider
                .get_video_by_id(key.id)
                .await?
                .map(MediaItem::from),
        };
        Ok(item)
    }

    fn describe(key: MediaKey) -> String {
        match key.content_type {
            ContentType::Image => format!("Image {}", key.id),
            ContentType::Video => format!("Video {}", key.id),
        }
    }
}
