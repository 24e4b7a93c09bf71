//! Tolerant decoding of record identifiers.
//!
//! The backend stores ObjectId strings, but older endpoints and fixtures emit
//! plain numbers. Both decode into `String`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// `#[serde(deserialize_with = "record_id::required")]`
pub fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// `#[serde(default, deserialize_with = "record_id::optional")]`
///
/// Blank strings decode as `None`.
pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawId>::deserialize(deserializer)?;
    Ok(raw
        .map(String::from)
        .filter(|id| !id.trim().is_empty()))
}
