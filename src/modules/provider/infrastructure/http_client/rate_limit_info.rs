//! Quota information reported by the media API in response headers

use std::time::Duration;

/// Information extracted from `X-RateLimit-*` and `Retry-After` headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// How long to wait before the next request (from Retry-After header)
    pub retry_after: Option<Duration>,
    /// Time until the quota window resets (from X-RateLimit-Reset, in seconds)
    pub reset_after: Option<Duration>,
    /// Number of requests remaining (from X-RateLimit-Remaining header)
    pub remaining: Option<u32>,
    /// Total requests per window (from X-RateLimit-Limit header)
    pub limit: Option<u32>,
}

impl RateLimitInfo {
    /// Parse rate limit information from HTTP response headers
    pub fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let number = |name: &str| {
            headers
                .get(name)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok())
        };

        Self {
            retry_after: number("retry-after").map(Duration::from_secs),
            // Pixabay reports the reset as seconds remaining in the window
            reset_after: number("x-ratelimit-reset").map(Duration::from_secs),
            remaining: number("x-ratelimit-remaining").map(|v| v as u32),
            limit: number("x-ratelimit-limit").map(|v| v as u32),
        }
    }

    /// Best guess of how long the quota stays exhausted
    pub fn recommended_delay(&self) -> Option<Duration> {
        self.retry_after.or(self.reset_after)
    }

    /// True when the server says no requests are left in the window
    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }

    /// Human readable summary used in errors and logs
    pub fn describe(&self) -> String {
        match (self.remaining, self.limit, self.recommended_delay()) {
            (Some(remaining), Some(limit), Some(delay)) => format!(
                "{}/{} requests left, resets in {}s",
                remaining,
                limit,
                delay.as_secs()
            ),
            (_, _, Some(delay)) => format!("retry in {}s", delay.as_secs()),
            (Some(remaining), Some(limit), None) => {
                format!("{}/{} requests left", remaining, limit)
            }
            _ => "no quota information".to_string(),
        }
    }
}
