use tokio_util::sync::CancellationToken;

use super::pager::Pager;
use crate::modules::media::ImageItem;
use crate::modules::search::domain::PagingSource;
use crate::shared::application::pagination::PagingConfig;

/// In-memory state of one search: the query and everything paged in for it
pub struct SearchSession {
    query: String,
    pager: Pager<ImageItem>,
    cancel: CancellationToken,
}

impl SearchSession {
    pub fn new(
        query: impl Into<String>,
        source: Box<dyn PagingSource<ImageItem>>,
        config: PagingConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            query: query.into(),
            pager: Pager::new(source, config, cancel.clone()),
            cancel,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn pager(&self) -> &Pager<ImageItem> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<ImageItem> {
        &mut self.pager
    }

    /// Abort in-flight loads; the session cannot load again afterwards
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
