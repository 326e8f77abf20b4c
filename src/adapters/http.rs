use crate::domain::ports::JsonFetcher;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("org-lens/", env!("CARGO_PKG_VERSION"));

/// `JsonFetcher` backed by a reqwest `Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        tracing::debug!("response status: {}", response.status());
        let payload = response.error_for_status()?.json().await?;
        Ok(payload)
    }
}
