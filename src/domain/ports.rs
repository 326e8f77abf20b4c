use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Transport port: fetch a URL and decode the response body as JSON.
///
/// The client treats implementations as black boxes; redirects, headers and
/// connection reuse are the implementation's concern. Errors propagate to the
/// caller unchanged, there is no retry layer.
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}
