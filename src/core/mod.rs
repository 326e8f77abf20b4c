pub mod client;

pub use crate::domain::model::{License, Repo};
pub use crate::domain::ports::JsonFetcher;
pub use crate::utils::error::Result;
