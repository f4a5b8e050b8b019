//! Request execution and response error handling

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::ChessError;

/// Performs a GET request and returns the response body.
///
/// Failures are reported once, without retrying:
/// - timeouts and connection failures map to the network errors
/// - non-success statuses map by code (404, 429, other 4xx, 5xx, anything
///   else such as an unfollowed redirect)
pub(super) fn fetch_text(client: &Client, url: &str) -> Result<String, ChessError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            ChessError::network_timeout(url)
        } else if e.is_connect() {
            ChessError::network_connection(url, e.to_string())
        } else {
            ChessError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(status_error(status_code, reason, url));
    }

    let text = response.text().map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            ChessError::network_timeout(url)
        } else {
            ChessError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", text.len());
    Ok(text)
}

/// Maps a non-success status code onto the error taxonomy.
fn status_error(status_code: u16, reason: &str, url: &str) -> ChessError {
    match status_code {
        404 => ChessError::api_not_found(url),
        429 => ChessError::api_rate_limit(reason, url),
        400..=499 => ChessError::api_client_error(status_code, reason, url),
        500..=599 => ChessError::api_server_error(status_code, reason, url),
        _ => ChessError::api_unexpected_status(status_code, reason, url),
    }
}

/// Parses a response body as JSON.
pub(super) fn parse_json(text: &str, url: &str) -> Result<Value, ChessError> {
    if text.trim().is_empty() {
        error!("Empty response body (URL: {})", url);
        return Err(ChessError::api_malformed_json("Response body is empty", url));
    }

    serde_json::from_str(text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );
        ChessError::api_malformed_json(e.to_string(), url)
    })
}
