pub mod modules;
mod schema;
pub mod shared;

use modules::{
    detail::DetailService,
    favorites::{FavoritesService, MediaRecordRepository, MediaRecordRepositoryImpl},
    provider::{MediaProviderRepository, PixabayAdapter},
    search::SearchService,
};
use shared::{
    application::pagination::PagingConfig, utils::init_logger, AppConfig, AppResult, Database,
};
use std::sync::Arc;
use tokio::task;

/// Services shared by every command handler
pub struct AppState {
    pub config: AppConfig,
    pub database: Arc<Database>,
    pub favorites_service: Arc<FavoritesService>,
    pub search_service: Arc<SearchService>,
    pub detail_service: Arc<DetailService>,
}

impl AppState {
    /// Open the database and wire the services against the live Pixabay API
    pub async fn initialize(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        let database_url = config.database_url.clone();
        let database = task::spawn_blocking(move || Database::new(&database_url)).await??;

        let provider: Arc<dyn MediaProviderRepository> = Arc::new(PixabayAdapter::new(&config)?);

        Self::from_parts(config, Arc::new(database), provider).await
    }

    /// Wire the services from prepared parts (tests pass a mock provider here)
    pub async fn from_parts(
        config: AppConfig,
        database: Arc<Database>,
        provider: Arc<dyn MediaProviderRepository>,
    ) -> AppResult<Self> {
        let record_repo: Arc<dyn MediaRecordRepository> =
            Arc::new(MediaRecordRepositoryImpl::new(Arc::clone(&database)));

        let favorites_service = Arc::new(FavoritesService::initialize(record_repo).await?);

        let search_service = Arc::new(SearchService::new(
            Arc::clone(&provider),
            Arc::clone(&favorites_service),
            PagingConfig::new(config.page_size, config.initial_load_size),
            config.cache_search_results,
        ));

        let detail_service = Arc::new(DetailService::new(
            Arc::clone(&provider),
            Arc::clone(&favorites_service),
        ));

        Ok(Self {
            config,
            database,
            favorites_service,
            search_service,
            detail_service,
        })
    }

    /// Cancel outstanding work before the host tears the app down
    pub async fn shutdown(&self) {
        self.search_service.close().await;
        log::info!("Application state shut down");
    }
}

/// Entry point used by the mobile shells: logging, configuration, services
pub async fn run() -> AppResult<AppState> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    let state = AppState::initialize(config).await?;

    log::info!("Edicon core ready");
    Ok(state)
}
