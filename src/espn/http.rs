use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::Result;


/// Base path for ESPN's public NFL core API.
pub const CORE_BASE_URL: &str = "https://sports.core.api.espn.com/v2/sports/football/leagues/nfl";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin JSON client for the ESPN core API.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
}

impl EspnClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(CORE_BASE_URL)
    }

    /// Client rooted at another base URL (a mock server in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("nfl-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path below the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET an absolute URL and decode the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");
        let res = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}
