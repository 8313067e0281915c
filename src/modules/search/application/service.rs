use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use super::image_paging_source::ImagePagingSource;
use super::pager::LoadOutcome;
use super::session::SearchSession;
use crate::modules::favorites::{FavoriteIds, FavoritesService};
use crate::modules::media::{ImageItem, VideoItem};
use crate::modules::provider::MediaProviderRepository;
use crate::shared::application::pagination::{PagingConfig, STARTING_PAGE_INDEX};
use crate::shared::config::MIN_PER_PAGE;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use crate::{log_debug, log_info, log_warn};

/// One row of the result list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub item: ImageItem,
    pub is_favorite: bool,
}

/// What the result screen renders for the active search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnapshot {
    pub query: String,
    pub items: Vec<SearchHit>,
    pub end_reached: bool,
    /// Earlier pages can be prepended with `load_previous` (after an anchored refresh)
    pub has_previous: bool,
    /// User message of the last failed page load, if the list is stuck on it
    pub error: Option<String>,
    pub favorite_ids: FavoriteIds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "snapshot", rename_all = "camelCase")]
pub enum SearchOutcome {
    /// Blank query, nothing was requested
    Skipped,
    Results(SearchSnapshot),
}

/// End of the list a load added items to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Head,
    Tail,
}

/// Query and token of the newest search, kept apart from the session so a new
/// search can cancel a load that is still holding the session
struct ActiveSearch {
    query: String,
    token: CancellationToken,
}

/// Image search with paging, one session at a time
pub struct SearchService {
    provider: Arc<dyn MediaProviderRepository>,
    favorites: Arc<FavoritesService>,
    config: PagingConfig,
    cache_results: bool,
    active: Mutex<Option<ActiveSearch>>,
    session: Mutex<Option<SearchSession>>,
}

impl SearchService {
    pub fn new(
        provider: Arc<dyn MediaProviderRepository>,
        favorites: Arc<FavoritesService>,
        config: PagingConfig,
        cache_results: bool,
    ) -> Self {
        Self {
            provider,
            favorites,
            config,
            cache_results,
            active: Mutex::new(None),
            session: Mutex::new(None),
        }
    }

    /// Start (or resume) a search for `query` and load its first page.
    ///
    /// A blank query is skipped without any request. A different query
    /// replaces the current session; the same query keeps it.
    pub async fn search(&self, query: &str) -> AppResult<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            log_debug!("Search: ignoring blank query");
            return Ok(SearchOutcome::Skipped);
        }

        let token = {
            let mut active = self.active.lock().await;
            if let Some(current) = active.as_ref() {
                if current.query == query && !current.token.is_cancelled() {
                    drop(active);
                    return self.resume().await.map(SearchOutcome::Results);
                }
                current.token.cancel();
            }

            let token = CancellationToken::new();
            *active = Some(ActiveSearch {
                query: query.to_string(),
                token: token.clone(),
            });
            token
        };

        LogContext::search_started(query);

        let mut guard = self.session.lock().await;
        if token.is_cancelled() {
            // Superseded by a newer search while waiting for the session
            return Err(AppError::Cancelled(format!("Search for '{}'", query)));
        }

        let source = ImagePagingSource::new(Arc::clone(&self.provider), query);
        let session = guard.insert(SearchSession::new(
            query,
            Box::new(source),
            self.config,
            token,
        ));

        let outcome = session.pager_mut().load_next().await;
        self.after_load(session, outcome, Edge::Tail).await?;

        Ok(SearchOutcome::Results(self.build_snapshot(session)))
    }

    /// Re-submitted query: keep the session, retrying the first page if it never loaded
    async fn resume(&self) -> AppResult<SearchSnapshot> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(Self::no_session)?;

        if session.pager().pages().is_empty() {
            let outcome = session.pager_mut().load_next().await;
            self.after_load(session, outcome, Edge::Tail).await?;
        }

        Ok(self.build_snapshot(session))
    }

    /// Append the next page of the active search
    pub async fn load_more(&self) -> AppResult<SearchSnapshot> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(Self::no_session)?;

        let outcome = session.pager_mut().load_next().await;
        self.after_load(session, outcome, Edge::Tail).await?;

        Ok(self.build_snapshot(session))
    }

    /// Prepend the page before the first loaded one; a no-op at the top of the list
    pub async fn load_previous(&self) -> AppResult<SearchSnapshot> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(Self::no_session)?;

        let outcome = session.pager_mut().load_previous().await;
        self.after_load(session, outcome, Edge::Head).await?;

        Ok(self.build_snapshot(session))
    }

    /// Reload the active search around the item at `anchor_position`
    pub async fn refresh(&self, anchor_position: Option<usize>) -> AppResult<SearchSnapshot> {
        let mut guard = self.session.lock().await;
        let session = guard.as_mut().ok_or_else(Self::no_session)?;

        let outcome = session.pager_mut().refresh(anchor_position).await;
        self.after_load(session, outcome, Edge::Tail).await?;

        Ok(self.build_snapshot(session))
    }

    /// Current state of the active search, if any
    pub async fn snapshot(&self) -> Option<SearchSnapshot> {
        let guard = self.session.lock().await;
        guard.as_ref().map(|session| self.build_snapshot(session))
    }

    /// Cancel and drop the active search (the result screen went away)
    pub async fn close(&self) {
        if let Some(active) = self.active.lock().await.take() {
            active.token.cancel();
        }

        if let Some(session) = self.session.lock().await.take() {
            session.cancel();
            log_info!(
                "Search: closed '{}' after {} item(s)",
                session.query(),
                session.pager().item_count()
            );
        }
    }

    /// First video hit for `query`, shown as the home screen header
    pub async fn featured_video(&self, query: &str) -> AppResult<Option<VideoItem>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let page = self
            .provider
            .search_videos(query, STARTING_PAGE_INDEX, MIN_PER_PAGE)
            .await?;

        Ok(page.hits.into_iter().next())
    }

    async fn after_load(
        &self,
        session: &SearchSession,
        outcome: AppResult<LoadOutcome>,
        edge: Edge,
    ) -> AppResult<()> {
        let added = match outcome? {
            LoadOutcome::Loaded { added } => added,
            LoadOutcome::EndOfStream => {
                log_debug!("Search: '{}' has no more results", session.query());
                return Ok(());
            }
        };

        let pager = session.pager();
        LogContext::page_loaded(session.query(), pager.pages().len(), added);

        if self.cache_results && added > 0 {
            let mut items = pager.items();
            let fresh = match edge {
                Edge::Head => {
                    items.truncate(added);
                    items
                }
                Edge::Tail => items.split_off(items.len().saturating_sub(added)),
            };
            if let Err(e) = self.favorites.cache_images(&fresh).await {
                // The list is already shown; a failed cache write only costs offline access
                log_warn!("Search: failed to cache {} result(s): {}", fresh.len(), e);
            }
        }

        Ok(())
    }

    fn build_snapshot(&self, session: &SearchSession) -> SearchSnapshot {
        let favorite_ids = self.favorites.favorite_ids();
        let pager = session.pager();

        let items = pager
            .items()
            .into_iter()
            .map(|item| SearchHit {
                is_favorite: favorite_ids.images.contains(&item.id),
                item,
            })
            .collect();

        SearchSnapshot {
            query: session.query().to_string(),
            items,
            end_reached: pager.is_end_reached(),
            has_previous: pager.has_previous(),
            error: pager.last_error().map(AppError::user_message),
            favorite_ids,
        }
    }

    fn no_session() -> AppError {
        AppError::InvalidInput("No active search".to_string())
    }
}
