//! HTTP client with client-side rate limiting
//!
//! Requests wait for a token from a `governor` limiter sized to the API's
//! documented quota. Failures are reported as they happen; there is no
//! retry loop, the user retries from the UI.

use super::rate_limit_info::RateLimitInfo;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use governor::{Quota, RateLimiter as GovernorRateLimiter};
use reqwest::{header, Client, Response, StatusCode};
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

type DirectRateLimiter = GovernorRateLimiter<
    governor::state::direct::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
    governor::middleware::NoOpMiddleware,
>;

const USER_AGENT: &str = concat!("edicon/", env!("CARGO_PKG_VERSION"));

/// Longest response excerpt kept in error messages
const BODY_EXCERPT_CHARS: usize = 200;

/// Rate-limited JSON-over-HTTP client
pub struct RateLimitClient {
    client: Client,
    rate_limiter: DirectRateLimiter,
    provider_name: String,
}

impl RateLimitClient {
    /// Client for the Pixabay API (documented quota: 100 requests per 60 seconds)
    pub fn for_pixabay(requests_per_minute: u32, timeout: Duration) -> AppResult<Self> {
        Self::new("Pixabay", requests_per_minute, timeout)
    }

    /// Create a custom client
    pub fn new(provider_name: &str, requests_per_minute: u32, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ConfigurationError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            rate_limiter: Self::create_rate_limiter(requests_per_minute)?,
            provider_name: provider_name.to_string(),
        })
    }

    /// Limiter that refills evenly across the minute with a small burst allowance
    fn create_rate_limiter(requests_per_minute: u32) -> AppResult<DirectRateLimiter> {
        let per_minute = NonZeroU32::new(requests_per_minute).ok_or_else(|| {
            AppError::ConfigurationError("Requests per minute must be positive".to_string())
        })?;

        let burst = NonZeroU32::new(requests_per_minute.clamp(1, 10)).unwrap_or(per_minute);
        let quota = Quota::per_minute(per_minute).allow_burst(burst);

        Ok(GovernorRateLimiter::direct(quota))
    }

    /// GET `url` and decode the JSON body
    pub async fn get<T>(&self, url: &str) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let endpoint = redact_api_key(url);

        // Wait for rate limiter before sending
        self.rate_limiter.until_ready().await;

        LogContext::api_request(&self.provider_name, &endpoint);
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                // reqwest errors embed the full URL, which carries the API key
                let err = AppError::from(e.without_url());
                log::warn!("{} request to {} failed: {}", self.provider_name, endpoint, err);
                err
            })?;

        let status = response.status();
        let quota = RateLimitInfo::from_headers(response.headers());
        LogContext::api_response(
            &self.provider_name,
            &endpoint,
            status.as_u16(),
            start.elapsed(),
        );

        if quota.remaining.is_some() {
            log::debug!("{} quota: {}", self.provider_name, quota.describe());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(&self.provider_name, status, &quota, &body));
        }

        self.parse_response(response).await
    }

    /// Decode a successful response body
    async fn parse_response<T>(&self, response: Response) -> AppResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response_text = response.text().await.map_err(|e| {
            AppError::ApiError(format!(
                "Failed to read {} response: {}",
                self.provider_name,
                e.without_url()
            ))
        })?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::SerializationError(format!(
                "Failed to parse {} response: {}. Response: {}",
                self.provider_name,
                e,
                excerpt(&response_text)
            ))
        })
    }

    /// Check if a request can be made now (for testing/debugging).
    /// Consumes a token when one is available.
    pub fn can_make_request_now(&self) -> bool {
        self.rate_limiter.check().is_ok()
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }
}

/// Error for a non-success response. The API reports errors as plain text,
/// e.g. `[ERROR 400] "page" is out of valid range.`
fn status_error(provider: &str, status: StatusCode, quota: &RateLimitInfo, body: &str) -> AppError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AppError::RateLimitError(format!(
            "{} API quota exhausted ({})",
            provider,
            quota.describe()
        ));
    }

    AppError::HttpStatus {
        status: status.as_u16(),
        message: format!("{} API: {}", provider, excerpt(body.trim())),
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() > BODY_EXCERPT_CHARS {
        let cut: String = text.chars().take(BODY_EXCERPT_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

/// Replace the value of the `key` query parameter so URLs can be logged
pub fn redact_api_key(url: &str) -> String {
    let Some(query_start) = url.find('?') else {
        return url.to_string();
    };

    let (base, query) = url.split_at(query_start + 1);
    let redacted: Vec<String> = query
        .split('&')
        .map(|pair| {
            if pair.starts_with("key=") {
                "key=***".to_string()
            } else {
                pair.to_string()
            }
        })
        .collect();

    format!("{}{}", base, redacted.join("&"))
}
