use tokio::sync::watch;

use crate::modules::favorites::FavoriteIds;
use crate::modules::media::MediaKey;
use crate::shared::errors::{AppError, AppResult};

/// Live favorite flag of one item, backed by the favorites id view
pub struct FavoriteFlag {
    key: MediaKey,
    ids: watch::Receiver<FavoriteIds>,
}

impl FavoriteFlag {
    pub fn new(key: MediaKey, ids: watch::Receiver<FavoriteIds>) -> Self {
        Self { key, ids }
    }

    pub fn key(&self) -> MediaKey {
        self.key
    }

    /// Current value
    pub fn get(&self) -> bool {
        self.ids.borrow().contains(&self.key)
    }

    /// Wait until the flag flips and return its new value.
    /// Writes that leave this item's flag unchanged are skipped.
    pub async fn changed(&mut self) -> AppResult<bool> {
        let current = self.get();
        loop {
            self.ids.changed().await.map_err(|_| {
                AppError::InternalError("Favorites store was shut down".to_string())
            })?;

            let value = self.ids.borrow_and_update().contains(&self.key);
            if value != current {
                return Ok(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn reports_only_changes_for_its_item() {
        let (tx, rx) = watch::channel(FavoriteIds::default());
        let mut flag = FavoriteFlag::new(MediaKey::image(7), rx);
        assert!(!flag.get());

        let writer = tokio::spawn(async move {
            tx.send_replace(FavoriteIds::new([1], []));
            tokio::time::sleep(Duration::from_millis(5)).await;
            tx.send_replace(FavoriteIds::new([1, 7], []));
            tx
        });

        assert!(flag.changed().await.unwrap());
        assert!(flag.get());
        drop(writer.await.unwrap());
    }

    #[tokio::test]
    async fn closed_store_is_an_error() {
        let (tx, rx) = watch::channel(FavoriteIds::default());
        let mut flag = FavoriteFlag::new(MediaKey::video(1), rx);
        drop(tx);

        assert!(flag.changed().await.is_err());
    }
}
