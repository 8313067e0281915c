use crate::modules::favorites::domain::FavoriteRecord;
use crate::modules::media::{ImageItem, VideoItem};
use crate::schema::{images, videos};
use chrono::NaiveDateTime;
use diesel::prelude::*;

// ============= IMAGE MODELS =============

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = images)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ImageRecordModel {
    pub id: i64,
    pub tags: String,
    pub preview_url: Option<String>,
    pub web_format_url: Option<String>,
    pub full_url: Option<String>,
    pub uploader: String,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    pub kind: String,
    pub is_favorite: bool,
    pub is_cached: bool,
    pub saved_at: NaiveDateTime,
    pub favorited_at: Option<NaiveDateTime>,
}

// For inserting new rows
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = images)]
pub struct NewImageRecord {
    pub id: i64,
    pub tags: String,
    pub preview_url: Option<String>,
    pub web_format_url: Option<String>,
    pub full_url: Option<String>,
    pub uploader: String,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    pub kind: String,
    pub is_favorite: bool,
    pub is_cached: bool,
    pub saved_at: NaiveDateTime,
    pub favorited_at: Option<NaiveDateTime>,
}

// Item content only (excludes id and flags); a missing URL overwrites the stored one
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = images)]
#[diesel(treat_none_as_null = true)]
pub struct ImageSnapshotChangeset {
    pub tags: String,
    pub preview_url: Option<String>,
    pub web_format_url: Option<String>,
    pub full_url: Option<String>,
    pub uploader: String,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    pub kind: String,
}

impl ImageRecordModel {
    pub fn to_item(&self) -> ImageItem {
        ImageItem::new(self.id, self.tags.clone(), self.uploader.clone())
            .with_urls(
                self.preview_url.clone(),
                self.web_format_url.clone(),
                self.full_url.clone(),
            )
            .with_stats(self.views, self.downloads, self.likes)
            .with_kind(self.kind.clone())
    }

    pub fn to_record(&self) -> FavoriteRecord {
        FavoriteRecord {
            item: self.to_item().into(),
            is_favorite: self.is_favorite,
            is_cached: self.is_cached,
            saved_at: self.saved_at,
            favorited_at: self.favorited_at,
        }
    }
}

impl NewImageRecord {
    pub fn from_item(
        item: &ImageItem,
        favorited_at: Option<NaiveDateTime>,
        is_cached: bool,
        saved_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: item.id,
            tags: item.tags.clone(),
            preview_url: item.preview_url.clone(),
            web_format_url: item.web_format_url.clone(),
            full_url: item.full_url.clone(),
            uploader: item.user.clone(),
            views: item.views,
            downloads: item.downloads,
            likes: item.likes,
            kind: item.kind.clone(),
            is_favorite: favorited_at.is_some(),
            is_cached,
            saved_at,
            favorited_at,
        }
    }
}

impl From<&ImageItem> for ImageSnapshotChangeset {
    fn from(item: &ImageItem) -> Self {
        Self {
            tags: item.tags.clone(),
            preview_url: item.preview_url.clone(),
            web_format_url: item.web_format_url.clone(),
            full_url: item.full_url.clone(),
            uploader: item.user.clone(),
            views: item.views,
            downloads: item.downloads,
            likes: item.likes,
            kind: item.kind.clone(),
        }
    }
}

// ============= VIDEO MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = videos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct VideoRecordModel {
    pub id: i64,
    pub tags: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub page_url: String,
    pub uploader: String,
    pub duration: i64,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    pub kind: String,
    pub is_favorite: bool,
    pub is_cached: bool,
    pub saved_at: NaiveDateTime,
    pub favorited_at: Option<NaiveDateTime>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = videos)]
pub struct NewVideoRecord {
    pub id: i64,
    pub tags: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub page_url: String,
    pub uploader: String,
    pub duration: i64,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    pub kind: String,
    pub is_favorite: bool,
    pub is_cached: bool,
    pub saved_at: NaiveDateTime,
    pub favorited_at: Option<NaiveDateTime>,
}

#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = videos)]
pub struct VideoSnapshotChangeset {
    pub tags: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub page_url: String,
    pub uploader: String,
    pub duration: i64,
    pub views: i64,
    pub downloads: i64,
    pub likes: i64,
    pub kind: String,
}

impl VideoRecordModel {
    pub fn to_item(&self) -> VideoItem {
        VideoItem::new(
            self.id,
            self.tags.clone(),
            self.uploader.clone(),
            self.video_url.clone(),
            self.thumbnail_url.clone(),
        )
        .with_page_url(self.page_url.clone())
        .with_duration(self.duration)
        .with_stats(self.views, self.downloads, self.likes)
        .with_kind(self.kind.clone())
    }

    pub fn to_record(&self) -> FavoriteRecord {
        FavoriteRecord {
            item: self.to_item().into(),
            is_favorite: self.is_favorite,
            is_cached: self.is_cached,
            saved_at: self.saved_at,
            favorited_at: self.favorited_at,
        }
    }
}

impl NewVideoRecord {
    pub fn from_item(
        item: &VideoItem,
        favorited_at: Option<NaiveDateTime>,
        is_cached: bool,
        saved_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: item.id,
            tags: item.tags.clone(),
            video_url: item.video_url.clone(),
            thumbnail_url: item.thumbnail_url.clone(),
            page_url: item.page_url.clone(),
            uploader: item.user.clone(),
            duration: item.duration,
            views: item.views,
            downloads: item.downloads,
            likes: item.likes,
            kind: item.kind.clone(),
            is_favorite: favorited_at.is_some(),
            is_cached,
            saved_at,
            favorited_at,
        }
    }
}

impl From<&VideoItem> for VideoSnapshotChangeset {
    fn from(item: &VideoItem) -> Self {
        Self {
            tags: item.tags.clone(),
            video_url: item.video_url.clone(),
            thumbnail_url: item.thumbnail_url.clone(),
            page_url: item.page_url.clone(),
            uploader: item.user.clone(),
            duration: item.duration,
            views: item.views,
            downloads: item.downloads,
            likes: item.likes,
            kind: item.kind.clone(),
        }
    }
}
