use log::{debug, info, warn, LevelFilter};
use std::sync::Once;
use std::time::{Duration, Instant};

use crate::modules::media::MediaKey;

static INIT: Once = Once::new();

/// Operations slower than this are reported at info level
pub const SLOW_OPERATION: Duration = Duration::from_millis(500);

/// Environment variable read for the log filter, in `env_logger` syntax
pub const LOG_ENV: &str = "EDICON_LOG";

/// Install the global logger once; later calls are no-ops
pub fn init_logger() {
    INIT.call_once(|| {
        let env = env_logger::Env::default().filter_or(LOG_ENV, "info");
        let result = env_logger::Builder::from_env(env)
            .filter_module("edicon_lib", LevelFilter::Debug)
            .filter_module("diesel", LevelFilter::Warn)
            .filter_module("reqwest", LevelFilter::Warn)
            .filter_module("hyper", LevelFilter::Warn)
            .filter_module("governor", LevelFilter::Warn)
            .format_timestamp_millis()
            .format_target(false)
            .try_init();

        // The host shell may already own the global logger
        if result.is_ok() {
            info!("Logging initialized (filter from {})", LOG_ENV);
        }
    });
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

fn millis(elapsed: Duration) -> u128 {
    elapsed.as_millis()
}

/// One-line log records for the client's recurring events
pub struct LogContext;

impl LogContext {
    /// A repository call finished; `table` is `images`, `videos` or both
    pub fn db_operation(operation: &str, table: &str, elapsed: Duration) {
        if elapsed >= SLOW_OPERATION {
            info!("DB: {} on {} was slow ({}ms)", operation, table, millis(elapsed));
        } else {
            debug!("DB: {} on {} in {}ms", operation, table, millis(elapsed));
        }
    }

    /// Outgoing provider request; `endpoint` must already be redacted
    pub fn api_request(provider: &str, endpoint: &str) {
        debug!("API: {} GET {}", provider, endpoint);
    }

    pub fn api_response(provider: &str, endpoint: &str, status: u16, elapsed: Duration) {
        if (200..300).contains(&status) {
            info!("API: {} {} -> {} in {}ms", provider, endpoint, status, millis(elapsed));
        } else {
            warn!("API: {} {} -> {} in {}ms", provider, endpoint, status, millis(elapsed));
        }
    }

    pub fn search_started(query: &str) {
        debug!("Search: starting '{}'", query);
    }

    /// A page was appended or prepended to the session for `query`
    pub fn page_loaded(query: &str, pages_held: usize, added: usize) {
        info!(
            "Search: '{}' +{} items ({} pages held)",
            query, added, pages_held
        );
    }

    pub fn favorite_change(key: MediaKey, is_favorite: bool) {
        info!(
            "Favorites: {} {}",
            key,
            if is_favorite { "added" } else { "removed" }
        );
    }

    pub fn pool_checkout_failed(error: &dyn std::error::Error) {
        log::error!("DB: no connection available from pool: {}", error);
    }
}

/// Wall-clock timer for a user-facing operation such as a detail lookup
pub struct TimedOperation {
    label: String,
    start: Instant,
}

impl TimedOperation {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Log how the operation ended and return its duration
    pub fn finish(self, outcome: &str) -> Duration {
        let elapsed = self.elapsed();
        if elapsed >= SLOW_OPERATION {
            info!("{}: {} after {}ms (slow)", self.label, outcome, millis(elapsed));
        } else {
            debug!("{}: {} in {}ms", self.label, outcome, millis(elapsed));
        }
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logger_is_idempotent() {
        init_logger();
        init_logger();
    }

    #[test]
    fn finish_reports_elapsed_time() {
        let timer = TimedOperation::new("detail image:1");
        std::thread::sleep(Duration::from_millis(5));
        let elapsed = timer.finish("fetched remotely");
        assert!(elapsed >= Duration::from_millis(5));
    }
}
