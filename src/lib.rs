pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::HttpFetcher;
pub use crate::core::client::GithubOrgClient;
pub use crate::domain::model::{License, Repo};
pub use crate::domain::ports::JsonFetcher;
pub use crate::utils::error::{ClientError, Result};
