use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;

use crate::auth::claims::{Claims, TokenKind};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("token is malformed")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("token subject must not be empty")]
    EmptySubject,
    #[error("failed to encode token: {0}")]
    Encode(String),
}

/// A signed token and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: IssuedToken,
    pub refresh_token: IssuedToken,
}

fn unix_seconds(now: SystemTime) -> Result<i64, TokenError> {
    now.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| TokenError::Encode("system clock is before the unix epoch".to_string()))
}

/// Claims for `subject` issued at `now`, expiring after the kind's lifetime.
pub fn build_claims(
    subject: &str,
    kind: TokenKind,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, TokenError> {
    if subject.trim().is_empty() {
        return Err(TokenError::EmptySubject);
    }
    let iat = unix_seconds(now)?;
    let exp = security
        .lifetime_minutes(kind)
        .checked_mul(60)
        .and_then(|secs| iat.checked_add(secs))
        .ok_or_else(|| TokenError::Encode(format!("{kind:?} token lifetime overflows exp")))?;

    Ok(Claims {
        sub: subject.to_string(),
        iat,
        exp,
        kind,
    })
}

/// Sign a token of `kind` for `subject` with that kind's secret.
pub fn mint_token(
    subject: &str,
    kind: TokenKind,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let claims = build_claims(subject, kind, now, security)?;
    sign(&claims, security)
}

fn sign(claims: &Claims, security: &SecurityConfig) -> Result<String, TokenError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(security.secret(claims.kind)),
    )
    .map_err(|e| TokenError::Encode(e.to_string()))
}

fn issue(claims: &Claims, security: &SecurityConfig) -> Result<IssuedToken, TokenError> {
    let token = sign(claims, security)?;
    let expires = OffsetDateTime::from_unix_timestamp(claims.exp)
        .map_err(|e| TokenError::Encode(e.to_string()))?;
    Ok(IssuedToken { token, expires })
}

/// Mint an access/refresh pair for `subject`, both issued at `now`.
pub fn mint_token_pair(
    subject: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<TokenPair, TokenError> {
    let access = build_claims(subject, TokenKind::Access, now, security)?;
    let refresh = build_claims(subject, TokenKind::Refresh, now, security)?;

    Ok(TokenPair {
        access_token: issue(&access, security)?,
        refresh_token: issue(&refresh, security)?,
    })
}

/// Decode and validate a token of the expected `kind`.
///
/// The kind selects the secret; there is no default. Expiry is checked
/// twice: once by `jsonwebtoken` against the wall clock with zero leeway,
/// and once here against `now`. A token whose `type` claim disagrees with
/// `kind` is rejected as malformed.
pub fn decode_token(
    token: &str,
    kind: TokenKind,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(security.secret(kind)),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    if claims.exp <= unix_seconds(now)? {
        return Err(TokenError::Expired);
    }
    if claims.kind != kind {
        return Err(TokenError::Malformed);
    }
    Ok(claims)
}

/// True only for a valid access token whose `exp` is strictly after `now`.
pub fn verify_fresh(token: &str, now: SystemTime, security: &SecurityConfig) -> bool {
    let Ok(claims) = decode_token(token, TokenKind::Access, now, security) else {
        return false;
    };
    matches!(unix_seconds(now), Ok(now_secs) if claims.exp > now_secs)
}

impl From<TokenError> for AppError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::InvalidSignature | TokenError::Malformed | TokenError::Expired => {
                AppError::forbidden(ErrorCode::InvalidBearerToken, "Invalid bearer token")
            }
            TokenError::EmptySubject | TokenError::Encode(_) => {
                AppError::internal(format!("token issuance failed: {e}"))
            }
        }
    }
}
