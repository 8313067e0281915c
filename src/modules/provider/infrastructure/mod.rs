pub mod adapters;
pub mod http_client;

pub use adapters::PixabayAdapter;
pub use http_client::{RateLimitClient, RateLimitInfo};
