use std::fmt;

use jsonwebtoken::Algorithm;

use crate::auth::claims::TokenKind;
use crate::config::env::{must_var, opt_var, parse_var};
use crate::error::AppError;

pub const DEFAULT_ACCESS_MINUTES: i64 = 15;
pub const DEFAULT_REFRESH_MINUTES: i64 = 60 * 24 * 7;
/// Upper bound for either lifetime: ten years.
pub const MAX_LIFETIME_MINUTES: i64 = 60 * 24 * 366 * 10;

/// Token signing settings. Immutable after startup.
///
/// Access and refresh tokens are signed with different secrets so that one
/// kind can never be accepted in place of the other.
#[derive(Clone)]
pub struct SecurityConfig {
    access_secret: Vec<u8>,
    refresh_secret: Vec<u8>,
    /// HMAC algorithm used for both kinds (defaults to HS256)
    pub algorithm: Algorithm,
    access_minutes: i64,
    refresh_minutes: i64,
}

impl SecurityConfig {
    /// Create a config with default algorithm and lifetimes.
    pub fn new(access_secret: impl Into<Vec<u8>>, refresh_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            algorithm: Algorithm::HS256,
            access_minutes: DEFAULT_ACCESS_MINUTES,
            refresh_minutes: DEFAULT_REFRESH_MINUTES,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_lifetimes(mut self, access_minutes: i64, refresh_minutes: i64) -> Self {
        self.access_minutes = access_minutes;
        self.refresh_minutes = refresh_minutes;
        self
    }

    /// Load from `JWT_SECRET_KEY`, `JWT_REFRESH_SECRET_KEY`, `ALGORITHM`,
    /// `ACCESS_TOKEN_EXPIRE_MINUTES` and `REFRESH_TOKEN_EXPIRE_MINUTES`.
    pub fn from_env() -> Result<Self, AppError> {
        let access_secret = must_var("JWT_SECRET_KEY")?;
        let refresh_secret = must_var("JWT_REFRESH_SECRET_KEY")?;
        let algorithm = match opt_var("ALGORITHM") {
            Some(name) => parse_algorithm(&name)?,
            None => Algorithm::HS256,
        };
        let access_minutes = parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", DEFAULT_ACCESS_MINUTES)?;
        let refresh_minutes = parse_var("REFRESH_TOKEN_EXPIRE_MINUTES", DEFAULT_REFRESH_MINUTES)?;

        let config = Self::new(access_secret, refresh_secret)
            .with_algorithm(algorithm)
            .with_lifetimes(access_minutes, refresh_minutes);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(AppError::config("JWT secrets must not be empty"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::config(
                "JWT_SECRET_KEY and JWT_REFRESH_SECRET_KEY must differ",
            ));
        }
        if self.access_minutes <= 0 || self.refresh_minutes <= 0 {
            return Err(AppError::config("Token lifetimes must be positive minutes"));
        }
        if self.access_minutes.max(self.refresh_minutes) > MAX_LIFETIME_MINUTES {
            return Err(AppError::config(format!(
                "Token lifetimes must not exceed {MAX_LIFETIME_MINUTES} minutes"
            )));
        }
        Ok(())
    }

    pub fn secret(&self, kind: TokenKind) -> &[u8] {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }

    pub fn lifetime_minutes(&self, kind: TokenKind) -> i64 {
        match kind {
            TokenKind::Access => self.access_minutes,
            TokenKind::Refresh => self.refresh_minutes,
        }
    }
}

// Secrets stay out of Debug output.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("algorithm", &self.algorithm)
            .field("access_minutes", &self.access_minutes)
            .field("refresh_minutes", &self.refresh_minutes)
            .finish_non_exhaustive()
    }
}

/// Only the symmetric HMAC family is supported.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    match name.trim().to_ascii_uppercase().as_str() {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(AppError::config(format!(
            "Unsupported JWT algorithm '{other}' (expected HS256, HS384 or HS512)"
        ))),
    }
}
