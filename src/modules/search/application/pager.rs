use std::collections::HashSet;
use tokio_util::sync::CancellationToken;

use crate::modules::media::{Identified, MediaId};
use crate::modules::search::domain::PagingSource;
use crate::shared::application::pagination::{
    LoadParams, LoadResult, Page, PagingConfig, PagingState, STARTING_PAGE_INDEX,
};
use crate::shared::errors::{AppError, AppResult};

/// Consecutive pages made only of already seen items that are skipped in one load
const MAX_DUPLICATE_PAGES: usize = 3;

/// Result of a successful pager load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// `added` items were new to this session
    Loaded { added: usize },
    /// Nothing left to load
    EndOfStream,
}

/// Accumulates pages from a [`PagingSource`] into one de-duplicated list
///
/// Ids are tracked across the whole session, so an item returned on several
/// pages (the API shifts results while paging) shows up once. A failed load
/// leaves loaded pages in place; calling [`Pager::load_next`] again retries
/// the same key.
pub struct Pager<T: Send + 'static> {
    source: Box<dyn PagingSource<T>>,
    config: PagingConfig,
    pages: Vec<Page<T>>,
    seen: HashSet<MediaId>,
    next_key: Option<u32>,
    end_reached: bool,
    last_error: Option<AppError>,
    cancel: CancellationToken,
}

impl<T> Pager<T>
where
    T: Identified + Clone + Send + Sync + 'static,
{
    pub fn new(
        source: Box<dyn PagingSource<T>>,
        config: PagingConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            source,
            config,
            pages: Vec::new(),
            seen: HashSet::new(),
            next_key: None,
            end_reached: false,
            last_error: None,
            cancel,
        }
    }

    /// Append the next page
    pub async fn load_next(&mut self) -> AppResult<LoadOutcome> {
        if self.end_reached {
            return Ok(LoadOutcome::EndOfStream);
        }

        let mut added = 0;
        for _ in 0..=MAX_DUPLICATE_PAGES {
            let params = LoadParams::new(
                self.next_key,
                self.config.load_size(self.pages.is_empty()),
            );
            let page = self.fetch(params).await?;
            added += self.append(page);

            if added > 0 || self.end_reached {
                break;
            }
            tracing::debug!(key = ?self.next_key, "page held only seen items, loading next");
        }

        Ok(self.outcome(added))
    }

    /// Prepend the page before the first loaded one (after a refresh from a later page)
    pub async fn load_previous(&mut self) -> AppResult<LoadOutcome> {
        let Some(key) = self.pages.first().and_then(|page| page.prev_key) else {
            return Ok(LoadOutcome::EndOfStream);
        };

        let Page {
            data,
            prev_key,
            next_key,
        } = self
            .fetch(LoadParams::new(Some(key), self.config.page_size))
            .await?;

        let fresh = self.filter_seen(data);
        let added = fresh.len();
        self.pages.insert(0, Page::new(fresh, prev_key, next_key));

        Ok(LoadOutcome::Loaded { added })
    }

    /// Reload from the page around `anchor_position`, discarding everything loaded so far.
    /// On failure the current pages are kept.
    ///
    /// Keys past the first page number windows of `page_size` items, so the
    /// reload uses that size; only the first page is loaded at the initial size.
    /// Earlier pages come back through [`Pager::load_previous`].
    pub async fn refresh(&mut self, anchor_position: Option<usize>) -> AppResult<LoadOutcome> {
        let key = self
            .source
            .refresh_key(&PagingState::new(&self.pages, anchor_position));
        let from_start = key.unwrap_or(STARTING_PAGE_INDEX) == STARTING_PAGE_INDEX;
        tracing::debug!(?key, ?anchor_position, "refreshing pager");

        let page = self
            .fetch(LoadParams::new(key, self.config.load_size(from_start)))
            .await?;

        self.pages.clear();
        self.seen.clear();
        let added = self.append(page);

        Ok(self.outcome(added))
    }

    /// Load through the source, giving up as soon as the session is cancelled
    async fn fetch(&mut self, params: LoadParams) -> AppResult<Page<T>> {
        if self.cancel.is_cancelled() {
            return Err(Self::cancelled());
        }

        let result = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(Self::cancelled()),
            result = self.source.load(params) => result,
        };

        match result {
            LoadResult::Page(page) => {
                self.last_error = None;
                Ok(page)
            }
            LoadResult::Error(err) => {
                tracing::warn!(key = ?params.key, error = %err, "page load failed");
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn append(&mut self, page: Page<T>) -> usize {
        let Page {
            data,
            prev_key,
            next_key,
        } = page;

        let fresh = self.filter_seen(data);
        let added = fresh.len();

        self.next_key = next_key;
        self.end_reached = next_key.is_none();
        self.pages.push(Page::new(fresh, prev_key, next_key));

        added
    }

    fn filter_seen(&mut self, data: Vec<T>) -> Vec<T> {
        data.into_iter()
            .filter(|item| self.seen.insert(item.media_id()))
            .collect()
    }

    fn outcome(&self, added: usize) -> LoadOutcome {
        if added == 0 && self.end_reached {
            LoadOutcome::EndOfStream
        } else {
            LoadOutcome::Loaded { added }
        }
    }

    fn cancelled() -> AppError {
        AppError::Cancelled("Search session closed".to_string())
    }

    /// Every loaded item, in order
    pub fn items(&self) -> Vec<T> {
        self.pages
            .iter()
            .flat_map(|page| page.data.iter().cloned())
            .collect()
    }

    pub fn pages(&self) -> &[Page<T>] {
        &self.pages
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }

    pub fn is_end_reached(&self) -> bool {
        self.end_reached
    }

    /// Error of the most recent failed load, cleared by the next success
    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// Whether pages before the first loaded one exist (after a refresh further down)
    pub fn has_previous(&self) -> bool {
        self.pages
            .first()
            .is_some_and(|page| page.prev_key.is_some())
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
