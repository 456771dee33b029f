//! Repository layer: domain models over the SeaORM adapters.

pub mod articles;
pub mod projects;
pub mod skills;
pub mod tags;
pub mod users;

/// `?skip=&limit=` window for list endpoints.
///
/// Both values must fit a signed 64-bit bind parameter and `limit` is capped
/// at [`Page::MAX_LIMIT`]; anything else fails deserialization and becomes a
/// 400 through the query error handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Page {
    #[serde(default, deserialize_with = "de_skip")]
    pub skip: u64,
    #[serde(default = "Page::default_limit", deserialize_with = "de_limit")]
    pub limit: u64,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 100;
    pub const MAX_LIMIT: u64 = 1000;

    fn default_limit() -> u64 {
        Self::DEFAULT_LIMIT
    }
}

fn bounded<'de, D>(deserializer: D, name: &str, max: u64) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = <u64 as serde::Deserialize>::deserialize(deserializer)?;
    if value > max {
        return Err(serde::de::Error::custom(format!("{name} must be at most {max}")));
    }
    Ok(value)
}

fn de_skip<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    bounded(deserializer, "skip", i64::MAX as u64)
}

fn de_limit<'de, D: serde::Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    bounded(deserializer, "limit", Page::MAX_LIMIT)
}

impl Default for Page {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}
