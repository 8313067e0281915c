use crate::log_info;
use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

/// Smallest and largest `per_page` values the Pixabay API accepts
pub const MIN_PER_PAGE: u32 = 3;
pub const MAX_PER_PAGE: u32 = 200;

const DEFAULT_BASE_URL: &str = "https://pixabay.com/api";
const DEFAULT_DATABASE_URL: &str = "edicon.db";

/// Application configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub base_url: String,
    pub database_url: String,
    pub page_size: u32,
    pub initial_load_size: u32,
    pub cache_search_results: bool,
    pub requests_per_minute: u32,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Build a configuration with defaults for everything but the API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            page_size: 20,
            initial_load_size: 40,
            cache_search_results: false,
            requests_per_minute: 100,
            request_timeout: Duration::from_secs(15),
        }
    }

    /// Load configuration from the process environment (and `.env` if present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`AppConfig::from_env`] so tests can feed a map instead of
    /// mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("PIXABAY_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::ConfigurationError("PIXABAY_API_KEY is not set".to_string())
            })?;

        let mut config = Self::new(api_key);

        if let Some(base_url) = lookup("PIXABAY_BASE_URL") {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(database_url) = lookup("EDICON_DATABASE_URL") {
            config.database_url = database_url.trim().to_string();
        }
        if let Some(value) = lookup("EDICON_PAGE_SIZE") {
            config.page_size = parse_number("EDICON_PAGE_SIZE", &value)?;
        }
        if let Some(value) = lookup("EDICON_INITIAL_LOAD_SIZE") {
            config.initial_load_size = parse_number("EDICON_INITIAL_LOAD_SIZE", &value)?;
        }
        if let Some(value) = lookup("EDICON_CACHE_SEARCH_RESULTS") {
            config.cache_search_results = parse_flag("EDICON_CACHE_SEARCH_RESULTS", &value)?;
        }
        if let Some(value) = lookup("PIXABAY_REQUESTS_PER_MINUTE") {
            config.requests_per_minute = parse_number("PIXABAY_REQUESTS_PER_MINUTE", &value)?;
        }
        if let Some(value) = lookup("PIXABAY_TIMEOUT_SECS") {
            let secs: u32 = parse_number("PIXABAY_TIMEOUT_SECS", &value)?;
            config.request_timeout = Duration::from_secs(secs as u64);
        }

        config.validate()?;

        log_info!(
            "Configuration loaded: base_url={}, database={}, page_size={}, initial_load_size={}",
            config.base_url,
            config.database_url,
            config.page_size,
            config.initial_load_size
        );

        Ok(config)
    }

    /// Check value ranges the API and the pager rely on
    pub fn validate(&self) -> AppResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::ConfigurationError(
                "API key must not be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(AppError::ConfigurationError(format!(
                "Invalid base URL '{}'. Must start with http:// or https://",
                self.base_url
            )));
        }

        if self.database_url.is_empty() {
            return Err(AppError::ConfigurationError(
                "Database path must not be empty".to_string(),
            ));
        }

        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&self.page_size) {
            return Err(AppError::ConfigurationError(format!(
                "Page size {} is outside {}..={}",
                self.page_size, MIN_PER_PAGE, MAX_PER_PAGE
            )));
        }

        if self.initial_load_size < self.page_size || self.initial_load_size > MAX_PER_PAGE {
            return Err(AppError::ConfigurationError(format!(
                "Initial load size {} must be between the page size ({}) and {}",
                self.initial_load_size, self.page_size, MAX_PER_PAGE
            )));
        }

        if self.requests_per_minute == 0 {
            return Err(AppError::ConfigurationError(
                "Requests per minute must be positive".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(AppError::ConfigurationError(
                "Request timeout must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_number(name: &str, value: &str) -> AppResult<u32> {
    value.trim().parse::<u32>().map_err(|e| {
        AppError::ConfigurationError(format!("{} has invalid value '{}': {}", name, value, e))
    })
}

fn parse_flag(name: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::ConfigurationError(format!(
            "{} has invalid value '{}'",
            name, other
        ))),
    }
}
