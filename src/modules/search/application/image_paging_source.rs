use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use crate::modules::media::ImageItem;
use crate::modules::provider::MediaProviderRepository;
use crate::modules::search::domain::PagingSource;
use crate::shared::application::pagination::{
    LoadParams, LoadResult, Page, PagingState, STARTING_PAGE_INDEX,
};

/// Pages of image search results for one query
pub struct ImagePagingSource {
    provider: Arc<dyn MediaProviderRepository>,
    query: String,
}

impl ImagePagingSource {
    pub fn new(provider: Arc<dyn MediaProviderRepository>, query: impl Into<String>) -> Self {
        Self {
            provider,
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[async_trait]
impl PagingSource<ImageItem> for ImagePagingSource {
    async fn load(&self, params: LoadParams) -> LoadResult<ImageItem> {
        let page = params.key.unwrap_or(STARTING_PAGE_INDEX);

        tracing::debug!(
            query = %self.query,
            page,
            load_size = params.load_size,
            "loading image page"
        );

        let result = match self
            .provider
            .search_images(&self.query, page, params.load_size)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!(query = %self.query, page, error = %err, "image page failed");
                return LoadResult::Error(err);
            }
        };

        // The API occasionally repeats a hit within one page
        let mut ids = HashSet::new();
        let data: Vec<ImageItem> = result
            .hits
            .into_iter()
            .filter(|image| ids.insert(image.id))
            .collect();

        let prev_key = if page == STARTING_PAGE_INDEX {
            None
        } else {
            Some(page - 1)
        };

        // Pages past the hit window are refused by the API
        let window_exhausted =
            u64::from(page) * u64::from(params.load_size) >= result.total_hits;
        let next_key = if data.is_empty() || window_exhausted {
            None
        } else {
            Some(page + 1)
        };

        LoadResult::Page(Page::new(data, prev_key, next_key))
    }

    fn refresh_key(&self, state: &PagingState<'_, ImageItem>) -> Option<u32> {
        let anchor = state.anchor_position?;
        let page = state.closest_page_to_position(anchor)?;

        page.prev_key
            .map(|key| key + 1)
            .or_else(|| page.next_key.map(|key| key - 1))
    }
}
