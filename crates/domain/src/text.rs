//! Serde helpers for optional free-text fields.

use serde::{Deserialize, Deserializer};

/// Decode a string that may be absent or `null`, treating both as empty.
///
/// Pair with `#[serde(default)]` so a missing key takes the same path.
///
/// # Errors
///
/// Fails when the value is present and neither a string nor `null`.
pub fn or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
