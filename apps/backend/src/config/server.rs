use crate::config::env::{opt_var, parse_var};
use crate::error::AppError;

pub const DEFAULT_API_PATH: &str = "/api/v1";

/// Credentials for the user created at startup when absent.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

/// Bind address, API prefix and optional admin seed.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_path: String,
    pub admin: Option<AdminSeed>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = opt_var("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var("BACKEND_PORT", 8000u16)?;
        let api_path = normalize_api_path(
            &opt_var("API_PATH").unwrap_or_else(|| DEFAULT_API_PATH.to_string()),
        );

        let admin = match (opt_var("ADMIN_USER"), opt_var("ADMIN_PW")) {
            (Some(email), Some(password)) => Some(AdminSeed { email, password }),
            (None, None) => None,
            _ => {
                return Err(AppError::config(
                    "ADMIN_USER and ADMIN_PW must be set together",
                ))
            }
        };

        Ok(Self {
            host,
            port,
            api_path,
            admin,
        })
    }
}

/// Leading slash, no trailing slash.
fn normalize_api_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
