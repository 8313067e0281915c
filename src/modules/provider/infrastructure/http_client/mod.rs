//! Rate-limited HTTP access to the media API

pub mod rate_limit_client;
pub mod rate_limit_info;

pub use rate_limit_client::RateLimitClient;
pub use rate_limit_info::RateLimitInfo;
