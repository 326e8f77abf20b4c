use crate::utils::error::{ClientError, Result};
use serde_json::Value;

/// Walks `path` through nested JSON objects, one key at a time, using each
/// step's result as the next step's input. An empty path returns `nested`
/// itself.
///
/// Fails with `ClientError::KeyNotFound` naming the first key that cannot be
/// resolved, either because the current level is not an object or because the
/// key is absent. Traversal stops at the first failure.
pub fn access_nested_map<'a>(nested: &'a Value, path: &[&str]) -> Result<&'a Value> {
    let mut current = nested;
    for key in path {
        current = current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| ClientError::KeyNotFound((*key).to_string()))?;
    }
    Ok(current)
}
