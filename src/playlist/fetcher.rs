// YouTube Data API client for playlist items

use async_trait::async_trait;
use std::time::Duration;

use super::errors::{PlaylistError, Result};
use super::models::{ApiErrorResponse, ParamValue, PlaylistItemsResponse, RawItem};
use super::query::to_query_string;
use super::traits::PlaylistSource;

/// playlistItems endpoint of the YouTube Data API v3
pub const PLAYLIST_ITEMS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/playlistItems";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const DEFAULT_USER_AGENT: &str = concat!("youtube-playlist/", env!("CARGO_PKG_VERSION"));

/// Network configuration for the API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint to query (overridden by tests against a mock server)
    pub base_url: String,
    /// SOCKS5/HTTP proxy URL
    pub proxy: Option<String>,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: PLAYLIST_ITEMS_ENDPOINT.to_string(),
            proxy: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_proxy(mut self, proxy: Option<String>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Full request URL for one playlist
pub fn request_url(base_url: &str, playlist_id: &str, max_results: &ParamValue, api_key: &str) -> String {
    let query = [
        ("part", "snippet".to_string()),
        ("playlistId", playlist_id.to_string()),
        ("maxResults", max_results.to_string()),
        ("key", api_key.to_string()),
    ];
    format!("{}?{}", base_url, to_query_string(query))
}

/// `PlaylistSource` backed by the YouTube Data API
#[derive(Debug, Clone)]
pub struct YouTubeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl YouTubeApiClient {
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str());

        if let Some(proxy_url) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| PlaylistError::InvalidConfig(format!("proxy {}: {}", proxy_url, e)))?;
            tracing::debug!("[YouTubeApi] Using proxy: {}", proxy_url);
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| PlaylistError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into an error, keeping the API's message
    fn status_error(status: reqwest::StatusCode, body: &str) -> PlaylistError {
        let message = serde_json::from_str::<ApiErrorResponse>(body)
            .ok()
            .and_then(|r| r.error.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());

        PlaylistError::HttpStatus {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl PlaylistSource for YouTubeApiClient {
    fn name(&self) -> &'static str {
        "youtube-data-api"
    }

    async fn fetch(
        &self,
        playlist_id: &str,
        max_results: &ParamValue,
        api_key: &str,
    ) -> Result<Vec<RawItem>> {
        let url = request_url(&self.base_url, playlist_id, max_results, api_key);
        tracing::debug!("[YouTubeApi] GET playlist {} (maxResults={})", playlist_id, max_results);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let parsed: PlaylistItemsResponse = serde_json::from_str(&body)?;
        tracing::debug!("[YouTubeApi] ✓ {} items for {}", parsed.items.len(), playlist_id);

        Ok(parsed.items)
    }
}
