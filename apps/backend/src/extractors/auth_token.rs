use std::future::{ready, Ready};
use std::time::SystemTime;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::TokenKind;
use crate::auth::jwt::{decode_token, TokenError};
use crate::error::AppError;
use crate::middleware::jwt_auth::GateRejection;
use crate::state::security_config::SecurityConfig;

/// Raw bearer token accepted by the credential gate.
///
/// Only available inside scopes wrapped by `JwtAuth`; anywhere else the
/// extractor fails the same way a missing header would.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Email the token was issued to. The gate already verified it, so this
    /// only fails if the token expired since.
    pub fn subject(&self, now: SystemTime, security: &SecurityConfig) -> Result<String, TokenError> {
        decode_token(&self.token, TokenKind::Access, now, security).map(|claims| claims.sub)
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthToken>()
                .cloned()
                .ok_or_else(|| GateRejection::MissingCredentials.into()),
        )
    }
}
