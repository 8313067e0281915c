use async_trait::async_trait;

use crate::shared::application::pagination::{LoadParams, LoadResult, PagingState};

/// A page-keyed source of list items
#[async_trait]
pub trait PagingSource<T: Send + 'static>: Send + Sync {
    /// Load the page named by `params.key` (or the first page when `None`)
    async fn load(&self, params: LoadParams) -> LoadResult<T>;

    /// Key to reload from so that the item at the anchor stays visible
    fn refresh_key(&self, state: &PagingState<'_, T>) -> Option<u32>;
}
