use crate::core::client::GithubOrgClient;
use crate::core::JsonFetcher;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "org-lens")]
#[command(about = "List a GitHub organization's public repositories")]
pub struct CliConfig {
    /// Organization to query, e.g. "google"
    pub org: String,

    /// Keep only repositories with this license key, e.g. "apache-2.0"
    #[arg(long)]
    pub license: Option<String>,

    #[arg(long, default_value = "https://api.github.com")]
    pub api_base_url: String,

    /// Print the repository names as a JSON array
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn build_client<F: JsonFetcher>(&self, fetcher: F) -> GithubOrgClient<F> {
        GithubOrgClient::with_base_url(
            self.org.as_str(),
            self.api_base_url.trim_end_matches('/'),
            fetcher,
        )
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty("org", &self.org)?;
        validate_url("api_base_url", &self.api_base_url)?;
        if let Some(license) = &self.license {
            validate_non_empty("license", license)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(org: &str, base_url: &str) -> CliConfig {
        CliConfig {
            org: org.to_string(),
            license: None,
            api_base_url: base_url.to_string(),
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn test_validate() {
        assert!(config("google", "https://api.github.com").validate().is_ok());
        assert!(config("", "https://api.github.com").validate().is_err());
        assert!(config("google", "not-a-url").validate().is_err());

        let mut with_license = config("google", "https://api.github.com");
        with_license.license = Some(String::new());
        assert!(with_license.validate().is_err());
    }
}
