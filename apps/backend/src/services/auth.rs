//! Login and refresh: the two ways to obtain a token pair.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::claims::TokenKind;
use crate::auth::jwt::{decode_token, mint_token_pair, TokenError, TokenPair};
use crate::auth::password::{verify_against_dummy, verify_password};
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users;
use crate::state::security_config::SecurityConfig;

/// Exchange email and password for a fresh token pair.
///
/// Unknown email and wrong password produce the same `InvalidCredentials`
/// error, and both pay for one Argon2 verification.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    email: &str,
    password: &str,
    conn: &C,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<TokenPair, AppError> {
    let Some(user) = users::find_by_email(conn, email).await? else {
        verify_against_dummy(password);
        security::login_failed("unknown_email", email);
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash) {
        security::login_failed("wrong_password", email);
        return Err(AppError::InvalidCredentials);
    }

    let pair = mint_token_pair(&user.email, now, security)?;
    info!(user_id = user.id, email = %Redacted(&user.email), "login succeeded");
    Ok(pair)
}

/// Trade a valid refresh token for a brand-new pair for the same subject.
///
/// Every failure, including one while minting, is `InvalidRefreshToken`.
pub fn refresh(
    refresh_token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<TokenPair, AppError> {
    let claims = decode_token(refresh_token, TokenKind::Refresh, now, security)
        .map_err(reject_refresh)?;
    mint_token_pair(&claims.sub, now, security).map_err(reject_refresh)
}

fn reject_refresh(e: TokenError) -> AppError {
    security::refresh_rejected(&e.to_string());
    AppError::InvalidRefreshToken
}
