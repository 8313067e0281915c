use crate::modules::media::{ImageItem, MediaId, VideoItem};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One page of remote search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage<T> {
    /// Total matches the service knows about
    pub total: u64,
    /// Matches reachable through paging (the API caps this window)
    pub total_hits: u64,
    pub hits: Vec<T>,
}

impl<T> SearchPage<T> {
    pub fn new(total: u64, total_hits: u64, hits: Vec<T>) -> Self {
        Self {
            total,
            total_hits,
            hits,
        }
    }

    pub fn empty() -> Self {
        Self::new(0, 0, Vec::new())
    }
}

/// Read-only access to the remote media search service
///
/// Implementations hide the wire format and map responses to domain items.
/// Errors are transport or protocol failures; "no such id" is `Ok(None)`.
#[async_trait]
pub trait MediaProviderRepository: Send + Sync {
    /// Search images for `query`, one page at a time (pages start at 1)
    async fn search_images(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<SearchPage<ImageItem>>;

    /// Search videos for `query`, one page at a time (pages start at 1)
    async fn search_videos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<SearchPage<VideoItem>>;

    /// Look up a single image by its id
    async fn get_image_by_id(&self, id: MediaId) -> AppResult<Option<ImageItem>>;

    /// Look up a single video by its id
    async fn get_video_by_id(&self, id: MediaId) -> AppResult<Option<VideoItem>>;
}
