use crate::domain::model::Repo;
use crate::domain::ports::JsonFetcher;
use crate::utils::error::{ClientError, Result};
use crate::utils::memo::Memo;
use crate::utils::nested::access_nested_map;
use serde_json::Value;

/// GitHub organization API client.
///
/// Composes an injected [`JsonFetcher`] with the data shaping needed to list
/// an organization's repositories and filter them by license. Org metadata is
/// fetched at most once per client instance; the repository list is fetched
/// fresh on every `public_repos` call.
pub struct GithubOrgClient<F: JsonFetcher> {
    org_name: String,
    base_url: String,
    fetcher: F,
    org: Memo<Value>,
    repos_url: Memo<String>,
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.github.com";

    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        Self::with_base_url(org_name, Self::DEFAULT_BASE_URL, fetcher)
    }

    /// Overrides the API root, for tests and GitHub Enterprise hosts.
    pub fn with_base_url(
        org_name: impl Into<String>,
        base_url: impl Into<String>,
        fetcher: F,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            base_url: base_url.into(),
            fetcher,
            org: Memo::new(),
            repos_url: Memo::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Organization metadata, fetched from `{base_url}/orgs/{org}` exactly
    /// once per instance no matter how often it is accessed.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_fetch(|| async {
                let url = format!("{}/orgs/{}", self.base_url, self.org_name);
                tracing::debug!("fetching org metadata from {}", url);
                self.fetcher.get_json(&url).await
            })
            .await
    }

    /// The organization's repository-listing endpoint, extracted from the
    /// memoized org metadata. Does not trigger a second network fetch.
    pub async fn repos_url(&self) -> Result<&str> {
        let url = self
            .repos_url
            .get_or_try_fetch(|| async {
                let org = self.org().await?;
                let value = access_nested_map(org, &["repos_url"])?;
                value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| ClientError::Payload {
                        message: format!("repos_url is not a string: {}", value),
                    })
            })
            .await?;
        Ok(url.as_str())
    }

    /// Names of the organization's repositories, in payload order. With a
    /// license filter, keeps only repositories whose `license.key` equals it
    /// exactly (case-sensitive).
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let url = self.repos_url().await?;
        tracing::debug!("fetching repository list from {}", url);
        let payload = self.fetcher.get_json(url).await?;
        let repos: Vec<Repo> = serde_json::from_value(payload)?;

        let names = repos
            .iter()
            .filter(|repo| match license {
                Some(key) => Self::has_license(repo, key),
                None => true,
            })
            .map(|repo| repo.name.clone())
            .collect();
        Ok(names)
    }

    /// Whether `repo` carries the given license key. A missing `license`
    /// field or `key` subfield is a non-match, not an error.
    pub fn has_license(repo: &Repo, license_key: &str) -> bool {
        repo.license.as_ref().and_then(|license| license.key.as_deref()) == Some(license_key)
    }
}
