//! HTTP client creation and configuration utilities

use reqwest::blocking::Client;
use std::time::Duration;

/// Creates a blocking HTTP client with connection pooling and the given
/// request timeout and user agent.
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    user_agent: &str,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(user_agent)
        .build()
}
