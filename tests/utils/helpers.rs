/// Test helper functions and service builders
use super::test_db::TestDb;
use async_trait::async_trait;
use edicon_lib::modules::media::{ImageItem, MediaId, VideoItem};
use edicon_lib::modules::provider::{MediaProviderRepository, SearchPage};
use edicon_lib::shared::{AppConfig, AppResult};
use edicon_lib::AppState;
use std::sync::Arc;

// Stand-in for the Pixabay API; no test touches the network
mockall::mock! {
    pub Provider {}

    #[async_trait]
    impl MediaProviderRepository for Provider {
        async fn search_images(
            &self,
            query: &str,
            page: u32,
            per_page: u32,
        ) -> AppResult<SearchPage<ImageItem>>;

        async fn search_videos(
            &self,
            query: &str,
            page: u32,
            per_page: u32,
        ) -> AppResult<SearchPage<VideoItem>>;

        async fn get_image_by_id(&self, id: MediaId) -> AppResult<Option<ImageItem>>;

        async fn get_video_by_id(&self, id: MediaId) -> AppResult<Option<VideoItem>>;
    }
}

pub fn test_config(test_db: &TestDb) -> AppConfig {
    let mut config = AppConfig::new("test-key");
    config.database_url = test_db.url();
    config
}

/// Build the full application state on a test database and a mocked provider
pub async fn build_test_state(test_db: &TestDb, provider: MockProvider) -> AppState {
    build_test_state_with(test_db, provider, test_config(test_db)).await
}

pub async fn build_test_state_with(
    test_db: &TestDb,
    provider: MockProvider,
    config: AppConfig,
) -> AppState {
    let provider: Arc<dyn MediaProviderRepository> = Arc::new(provider);
    AppState::from_parts(config, test_db.database(), provider)
        .await
        .expect("Failed to build test state")
}
