//! Rate limiter tests
//!
//! Tests the HTTP client rate limiting implementation with RateLimitClient.

use edicon_lib::modules::provider::infrastructure::http_client::RateLimitClient;
use std::time::Duration;

#[tokio::test]
async fn test_rate_limit_client_creation() {
    let client = RateLimitClient::for_pixabay(100, Duration::from_secs(10)).unwrap();
    assert_eq!(client.provider_name(), "Pixabay");
}

#[tokio::test]
async fn test_can_make_request() {
    let client = RateLimitClient::for_pixabay(100, Duration::from_secs(10)).unwrap();
    assert!(client.can_make_request_now());
}

#[tokio::test]
async fn test_burst_is_bounded() {
    let client = RateLimitClient::new("Tiny", 2, Duration::from_secs(10)).unwrap();

    assert!(client.can_make_request_now());
    assert!(client.can_make_request_now());
    assert!(!client.can_make_request_now());
}

#[tokio::test]
async fn test_multiple_clients() {
    let images = RateLimitClient::for_pixabay(100, Duration::from_secs(10)).unwrap();
    let other = RateLimitClient::new("Other", 30, Duration::from_secs(5)).unwrap();

    assert_eq!(images.provider_name(), "Pixabay");
    assert_eq!(other.provider_name(), "Other");

    // Separate clients do not share a budget
    assert!(images.can_make_request_now());
    assert!(other.can_make_request_now());
}
