use serde::{Deserialize, Serialize};

/// A repository record as returned by the GitHub repository-list endpoint.
///
/// `name` is required; a record without one fails deserialization and the
/// error propagates to the caller. All unrecognized fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}
