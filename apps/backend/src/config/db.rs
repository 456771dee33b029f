use crate::config::env::{must_var, opt_var, parse_var};
use crate::error::AppError;

/// Which database a process connects to.
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Postgres configured through the environment
    Postgres,
    /// Private in-memory SQLite, migrated on connect (tests)
    InMemory,
}

/// Builds the connection URL for a profile.
///
/// `DATABASE_URL` wins when set; otherwise the URL is assembled from
/// `POSTGRES_SERVER`, `POSTGRES_PORT`, `POSTGRES_USER`, `POSTGRES_PW`, `POSTGRES_DB`.
pub fn db_url(profile: &DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::InMemory => Ok("sqlite::memory:".to_string()),
        DbProfile::Postgres => {
            if let Some(url) = opt_var("DATABASE_URL") {
                return Ok(url);
            }
            let host = must_var("POSTGRES_SERVER")?;
            let port = parse_var("POSTGRES_PORT", 5432u16)?;
            let username = must_var("POSTGRES_USER")?;
            let password = must_var("POSTGRES_PW")?;
            let db_name = must_var("POSTGRES_DB")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
    }
}

/// Pool size; in-memory SQLite is pinned to a single connection.
pub fn max_connections(profile: &DbProfile) -> Result<u32, AppError> {
    match profile {
        DbProfile::InMemory => Ok(1),
        DbProfile::Postgres => {
            let n = parse_var("DB_MAX_CONNECTIONS", 10u32)?;
            if n == 0 {
                return Err(AppError::config("DB_MAX_CONNECTIONS must be at least 1"));
            }
            Ok(n)
        }
    }
}
