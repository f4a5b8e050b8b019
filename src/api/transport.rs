use reqwest::blocking::Client;
use serde_json::Value;
use tracing::instrument;

use super::fetch_utils::{fetch_text, parse_json};
use super::http_client::create_http_client_with_timeout;
use crate::config::Config;
use crate::error::ChessError;

/// Source of API responses.
///
/// Accessors only ever issue GET requests for a full URL; implementations
/// decide how the body is obtained.
pub trait Transport {
    /// Fetches a URL and parses the body as JSON.
    fn get_json(&self, url: &str) -> Result<Value, ChessError>;

    /// Fetches a URL and returns the body as text.
    fn get_text(&self, url: &str) -> Result<String, ChessError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_json(&self, url: &str) -> Result<Value, ChessError> {
        (**self).get_json(url)
    }

    fn get_text(&self, url: &str) -> Result<String, ChessError> {
        (**self).get_text(url)
    }
}

/// [`Transport`] over a pooled blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout_seconds: u64, user_agent: &str) -> Result<Self, ChessError> {
        Ok(Self {
            client: create_http_client_with_timeout(timeout_seconds, user_agent)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ChessError> {
        Self::new(config.http_timeout_seconds, &config.user_agent)
    }
}

impl Transport for HttpTransport {
    #[instrument(skip(self))]
    fn get_json(&self, url: &str) -> Result<Value, ChessError> {
        let text = fetch_text(&self.client, url)?;
        parse_json(&text, url)
    }

    #[instrument(skip(self))]
    fn get_text(&self, url: &str) -> Result<String, ChessError> {
        fetch_text(&self.client, url)
    }
}
