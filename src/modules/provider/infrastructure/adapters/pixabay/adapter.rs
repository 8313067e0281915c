use async_trait::async_trait;

use crate::{
    modules::media::{ImageItem, MediaId, VideoItem},
    modules::provider::domain::{MediaProviderRepository, SearchPage},
    modules::provider::infrastructure::http_client::RateLimitClient,
    shared::config::{AppConfig, MAX_PER_PAGE, MIN_PER_PAGE},
    shared::errors::{AppError, AppResult},
};

use super::mapper::{MediaMapper, PixabayMapper};
use super::models::*;

/// Pixabay provider adapter over the REST API
pub struct PixabayAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
    mapper: PixabayMapper,
}

impl PixabayAdapter {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client =
            RateLimitClient::for_pixabay(config.requests_per_minute, config.request_timeout)?;
        Ok(Self::with_client(config, http_client))
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(config: &AppConfig, http_client: RateLimitClient) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            mapper: PixabayMapper::new(),
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    /// Image endpoint is the API root, videos live under `/videos/`
    fn endpoint(&self, videos: bool) -> String {
        if videos {
            format!("{}/videos/", self.base_url)
        } else {
            format!("{}/", self.base_url)
        }
    }

    pub(crate) fn search_url(&self, videos: bool, query: &str, page: u32, per_page: u32) -> String {
        format!(
            "{}?key={}&q={}&page={}&per_page={}",
            self.endpoint(videos),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(query.trim()),
            page.max(1),
            per_page.clamp(MIN_PER_PAGE, MAX_PER_PAGE)
        )
    }

    pub(crate) fn lookup_url(&self, videos: bool, id: MediaId) -> String {
        format!(
            "{}?key={}&id={}",
            self.endpoint(videos),
            urlencoding::encode(&self.api_key),
            id
        )
    }

    /// Fetch a lookup response, treating "unknown id" answers as an empty result
    async fn fetch_by_id<T>(&self, videos: bool, id: MediaId) -> AppResult<Option<PixabayResponse<T>>>
    where
        T: serde::de::DeserializeOwned,
    {
        if id <= 0 {
            return Err(AppError::InvalidInput(format!("Invalid Pixabay ID: {}", id)));
        }

        let url = self.lookup_url(videos, id);
        unknown_id_as_none(self.http_client.get::<PixabayResponse<T>>(&url).await, id)
    }
}

/// Unknown ids come back either as an empty hit list or as HTTP 404
fn unknown_id_as_none<T>(result: AppResult<T>, id: MediaId) -> AppResult<Option<T>> {
    match result {
        Ok(response) => Ok(Some(response)),
        Err(err) if err.is_http_status(404) => {
            log::info!("Pixabay: No content found for ID '{}'", id);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

#[async_trait]
impl MediaProviderRepository for PixabayAdapter {
    async fn search_images(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<SearchPage<ImageItem>> {
        let url = self.search_url(false, query, page, per_page);

        log::info!(
            "Pixabay: Searching images for '{}' (page: {}, per_page: {})",
            query,
            page,
            per_page
        );

        let response: PixabayResponse<ImageHit> = self.http_client.get(&url).await?;
        let images = self.mapper.map_list(response.hits);

        log::info!(
            "Pixabay: Found {} images for '{}' ({} reachable)",
            images.len(),
            query,
            response.total_hits
        );
        Ok(SearchPage::new(response.total, response.total_hits, images))
    }

    async fn search_videos(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> AppResult<SearchPage<VideoItem>> {
        let url = self.search_url(true, query, page, per_page);

        log::info!(
            "Pixabay: Searching videos for '{}' (page: {}, per_page: {})",
            query,
            page,
            per_page
        );

        let response: PixabayResponse<VideoHit> = self.http_client.get(&url).await?;
        let videos = self.mapper.map_list(response.hits);

        log::info!(
            "Pixabay: Found {} videos for '{}' ({} reachable)",
            videos.len(),
            query,
            response.total_hits
        );
        Ok(SearchPage::new(response.total, response.total_hits, videos))
    }

    async fn get_image_by_id(&self, id: MediaId) -> AppResult<Option<ImageItem>> {
        log::info!("Pixabay: Getting image by ID '{}'", id);

        let Some(response) = self.fetch_by_id::<ImageHit>(false, id).await? else {
            return Ok(None);
        };

        match response.hits.into_iter().next() {
            Some(hit) => Ok(Some(self.mapper.map_item(hit)?)),
            None => {
                log::info!("Pixabay: No image found for ID '{}'", id);
                Ok(None)
            }
        }
    }

    async fn get_video_by_id(&self, id: MediaId) -> AppResult<Option<VideoItem>> {
        log::info!("Pixabay: Getting video by ID '{}'", id);

        let Some(response) = self.fetch_by_id::<VideoHit>(true, id).await? else {
            return Ok(None);
        };

        match response.hits.into_iter().next() {
            Some(hit) => Ok(Some(self.mapper.map_item(hit)?)),
            None => {
                log::info!("Pixabay: No video found for ID '{}'", id);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn adapter() -> PixabayAdapter {
        let mut config = AppConfig::new("se cret");
        config.base_url = "https://pixabay.com/api/".to_string();
        let client = RateLimitClient::for_pixabay(100, Duration::from_secs(5)).unwrap();
        PixabayAdapter::with_client(&config, client)
    }

    #[test]
    fn search_url_encodes_and_clamps() {
        let adapter = adapter();
        assert_eq!(
            adapter.search_url(false, " red fox ", 2, 1),
            "https://pixabay.com/api/?key=se%20cret&q=red%20fox&page=2&per_page=3"
        );
        assert_eq!(
            adapter.search_url(true, "sea", 1, 500),
            "https://pixabay.com/api/videos/?key=se%20cret&q=sea&page=1&per_page=200"
        );
    }

    #[test]
    fn lookup_url_targets_content_endpoint() {
        let adapter = adapter();
        assert_eq!(
            adapter.lookup_url(true, 42),
            "https://pixabay.com/api/videos/?key=se%20cret&id=42"
        );
        assert_eq!(
            adapter.lookup_url(false, 42),
            "https://pixabay.com/api/?key=se%20cret&id=42"
        );
    }

    #[test]
    fn lookup_404_means_unknown_id() {
        let missing: AppResult<u8> = Err(AppError::HttpStatus {
            status: 404,
            message: "[ERROR 404] Not found".into(),
        });
        assert!(matches!(unknown_id_as_none(missing, 7), Ok(None)));
        assert!(matches!(unknown_id_as_none(Ok(1u8), 7), Ok(Some(1))));
    }

    #[test]
    fn other_lookup_failures_are_kept() {
        let server: AppResult<u8> = Err(AppError::HttpStatus {
            status: 500,
            message: "upstream".into(),
        });
        assert!(matches!(
            unknown_id_as_none(server, 7),
            Err(AppError::HttpStatus { status: 500, .. })
        ));

        // Only the status code counts, not text that happens to mention one
        let proxy: AppResult<u8> = Err(AppError::ApiError("gateway relayed HTTP 404".into()));
        assert!(matches!(unknown_id_as_none(proxy, 7), Err(AppError::ApiError(_))));
    }

    #[tokio::test]
    async fn non_positive_id_is_rejected_without_request() {
        let adapter = adapter();
        let result = adapter.get_image_by_id(0).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }
}
