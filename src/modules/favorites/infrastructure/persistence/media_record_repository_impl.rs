use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tokio::task;

use crate::modules::favorites::domain::{FavoriteIds, FavoriteRecord, MediaRecordRepository};
use crate::modules::favorites::infrastructure::models::{
    ImageRecordModel, ImageSnapshotChangeset, NewImageRecord, NewVideoRecord, VideoRecordModel,
    VideoSnapshotChangeset,
};
use crate::modules::media::{ContentType, ImageItem, MediaItem, MediaKey};
use crate::schema::{images, videos};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::shared::Database;
use crate::log_debug;

/// Diesel/SQLite implementation of [`MediaRecordRepository`]
pub struct MediaRecordRepositoryImpl {
    db: Arc<Database>,
}

impl MediaRecordRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Run a blocking diesel closure on the blocking pool with a pooled connection
    async fn with_conn<T, F>(
        &self,
        operation: &'static str,
        table: &'static str,
        f: F,
    ) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut SqliteConnection) -> AppResult<T> + Send + 'static,
    {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<T> {
            let start = Instant::now();
            let mut conn = db.get_connection()?;
            let result = f(&mut *conn);
            LogContext::db_operation(operation, table, start.elapsed());
            result
        })
        .await?
    }

    fn find_image(conn: &mut SqliteConnection, id: i64) -> AppResult<Option<ImageRecordModel>> {
        Ok(images::table
            .find(id)
            .select(ImageRecordModel::as_select())
            .first(conn)
            .optional()?)
    }

    fn find_video(conn: &mut SqliteConnection, id: i64) -> AppResult<Option<VideoRecordModel>> {
        Ok(videos::table
            .find(id)
            .select(VideoRecordModel::as_select())
            .first(conn)
            .optional()?)
    }
}

#[async_trait]
impl MediaRecordRepository for MediaRecordRepositoryImpl {
    async fn find(&self, key: MediaKey) -> AppResult<Option<FavoriteRecord>> {
        self.with_conn("find", key.content_type.table_name(), move |conn| {
            let record = match key.content_type {
                ContentType::Image => Self::find_image(conn, key.id)?.map(|m| m.to_record()),
                ContentType::Video => Self::find_video(conn, key.id)?.map(|m| m.to_record()),
            };
            Ok(record)
        })
        .await
    }

    async fn save_favorite(&self, item: &MediaItem) -> AppResult<FavoriteRecord> {
        let item = item.clone();
        let table = item.content_type().table_name();

        self.with_conn("save_favorite", table, move |conn| {
            let now = Utc::now().naive_utc();

            conn.transaction::<_, AppError, _>(|conn| match &item {
                MediaItem::Image(image) => {
                    // Keep is_cached and saved_at as stored; only the snapshot and favorite change
                    diesel::insert_into(images::table)
                        .values(&NewImageRecord::from_item(image, Some(now), false, now))
                        .on_conflict(images::id)
                        .do_update()
                        .set((
                            &ImageSnapshotChangeset::from(image),
                            images::is_favorite.eq(true),
                            images::favorited_at.eq(Some(now)),
                        ))
                        .execute(conn)?;

                    Self::find_image(conn, image.id)?
                        .map(|m| m.to_record())
                        .ok_or_else(|| AppError::NotFound(format!("Image {}", image.id)))
                }
                MediaItem::Video(video) => {
                    diesel::insert_into(videos::table)
                        .values(&NewVideoRecord::from_item(video, Some(now), false, now))
                        .on_conflict(videos::id)
                        .do_update()
                        .set((
                            &VideoSnapshotChangeset::from(video),
                            videos::is_favorite.eq(true),
                            videos::favorited_at.eq(Some(now)),
                        ))
                        .execute(conn)?;

                    Self::find_video(conn, video.id)?
                        .map(|m| m.to_record())
                        .ok_or_else(|| AppError::NotFound(format!("Video {}", video.id)))
                }
            })
        })
        .await
    }

    async fn clear_favorite(&self, key: MediaKey) -> AppResult<bool> {
        self.with_conn("clear_favorite", key.content_type.table_name(), move |conn| {
            conn.transaction::<_, AppError, _>(|conn| {
                let changed = match key.content_type {
                    ContentType::Image => {
                        // Cache entries stay, everything else goes
                        let kept = diesel::update(
                            images::table
                                .filter(images::id.eq(key.id))
                                .filter(images::is_favorite.eq(true))
                                .filter(images::is_cached.eq(true)),
                        )
                        .set((
                            images::is_favorite.eq(false),
                            images::favorited_at.eq(None::<NaiveDateTime>),
                        ))
                        .execute(conn)?;

                        let deleted = diesel::delete(
                            images::table
                                .filter(images::id.eq(key.id))
                                .filter(images::is_cached.eq(false)),
                        )
                        .execute(conn)?;

                        kept + deleted
                    }
                    ContentType::Video => {
                        let kept = diesel::update(
                            videos::table
                                .filter(videos::id.eq(key.id))
                                .filter(videos::is_favorite.eq(true))
                                .filter(videos::is_cached.eq(true)),
                        )
                        .set((
                            videos::is_favorite.eq(false),
                            videos::favorited_at.eq(None::<NaiveDateTime>),
                        ))
                        .execute(conn)?;

                        let deleted = diesel::delete(
                            videos::table
                                .filter(videos::id.eq(key.id))
                                .filter(videos::is_cached.eq(false)),
                        )
                        .execute(conn)?;

                        kept + deleted
                    }
                };

                Ok(changed > 0)
            })
        })
        .await
    }

    async fn favorite_ids(&self) -> AppResult<FavoriteIds> {
        self.with_conn("favorite_ids", "images+videos", |conn| {
            let image_ids: Vec<i64> = images::table
                .filter(images::is_favorite.eq(true))
                .select(images::id)
                .load(conn)?;

            let video_ids: Vec<i64> = videos::table
                .filter(videos::is_favorite.eq(true))
                .select(videos::id)
                .load(conn)?;

            Ok(FavoriteIds::new(image_ids, video_ids))
        })
        .await
    }

    async fn list_favorites(&self) -> AppResult<Vec<FavoriteRecord>> {
        self.with_conn("list_favorites", "images+videos", |conn| {
            let image_rows: Vec<ImageRecordModel> = images::table
                .filter(images::is_favorite.eq(true))
                .order((images::favorited_at.desc(), images::id.desc()))
                .select(ImageRecordModel::as_select())
                .load(conn)?;

            let video_rows: Vec<VideoRecordModel> = videos::table
                .filter(videos::is_favorite.eq(true))
                .order((videos::favorited_at.desc(), videos::id.desc()))
                .select(VideoRecordModel::as_select())
                .load(conn)?;

            let records = image_rows
                .iter()
                .map(ImageRecordModel::to_record)
                .chain(video_rows.iter().map(VideoRecordModel::to_record))
                .collect();

            Ok(records)
        })
        .await
    }

    async fn cache_images(&self, items: &[ImageItem]) -> AppResult<usize> {
        if items.is_empty() {
            return Ok(0);
        }

        let items = items.to_vec();

        self.with_conn("cache_images", "images", move |conn| {
            let now = Utc::now().naive_utc();

            conn.transaction::<_, AppError, _>(|conn| {
                let mut written = 0;
                for image in &items {
                    // Favorite columns and saved_at are left alone on conflict
                    written += diesel::insert_into(images::table)
                        .values(&NewImageRecord::from_item(image, None, true, now))
                        .on_conflict(images::id)
                        .do_update()
                        .set((
                            &ImageSnapshotChangeset::from(image),
                            images::is_cached.eq(true),
                        ))
                        .execute(conn)?;
                }

                log_debug!("Cached {} image(s) from search results", written);
                Ok(written)
            })
        })
        .await
    }

    async fn purge_transient(&self) -> AppResult<usize> {
        self.with_conn("purge_transient", "images+videos", |conn| {
            conn.transaction::<_, AppError, _>(|conn| {
                let images_removed =
                    diesel::delete(images::table.filter(images::is_favorite.eq(false)))
                        .execute(conn)?;
                let videos_removed =
                    diesel::delete(videos::table.filter(videos::is_favorite.eq(false)))
                        .execute(conn)?;

                // Surviving rows are favorites only
                diesel::update(images::table.filter(images::is_cached.eq(true)))
                    .set(images::is_cached.eq(false))
                    .execute(conn)?;
                diesel::update(videos::table.filter(videos::is_cached.eq(true)))
                    .set(videos::is_cached.eq(false))
                    .execute(conn)?;

                Ok(images_removed + videos_removed)
            })
        })
        .await
    }
}
