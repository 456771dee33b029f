//! Credential gate for protected scopes.
//!
//! Per request: `NoCredential -> CredentialPresented -> {Accepted, Rejected}`.
//! Rejections are 403 problem responses carrying one of three reasons.
//! Accepted requests get the raw bearer token in their extensions as
//! [`AuthToken`], readable through the `AuthToken` extractor.

use std::time::SystemTime;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::jwt::verify_fresh;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::auth_token::AuthToken;
use crate::logging::security;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

const BEARER: &str = "Bearer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    UnsupportedScheme,
    InvalidBearer,
    MissingCredentials,
}

impl GateRejection {
    pub const fn reason(&self) -> &'static str {
        match self {
            GateRejection::UnsupportedScheme => "Not supported authentication scheme",
            GateRejection::InvalidBearer => "Invalid bearer token",
            GateRejection::MissingCredentials => "No credentials provided",
        }
    }

    pub const fn code(&self) -> ErrorCode {
        match self {
            GateRejection::UnsupportedScheme => ErrorCode::UnsupportedAuthScheme,
            GateRejection::InvalidBearer => ErrorCode::InvalidBearerToken,
            GateRejection::MissingCredentials => ErrorCode::MissingCredentials,
        }
    }
}

impl From<GateRejection> for AppError {
    fn from(r: GateRejection) -> Self {
        AppError::forbidden(r.code(), r.reason())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum GateOutcome {
    Accepted(AuthToken),
    /// Lenient gate, no header: proceed unauthenticated
    Anonymous,
    Rejected(GateRejection),
}

/// Pure gate decision for one `Authorization` header value.
///
/// The scheme must be exactly `Bearer`. A header that is not valid text, or
/// a `Bearer` header with nothing after it, counts as no credential, which
/// only a missing header is forgiven for in lenient mode.
pub fn evaluate_credentials(
    header: Option<&HeaderValue>,
    strict: bool,
    now: SystemTime,
    security: &SecurityConfig,
) -> GateOutcome {
    let Some(header) = header else {
        return if strict {
            GateOutcome::Rejected(GateRejection::MissingCredentials)
        } else {
            GateOutcome::Anonymous
        };
    };

    let Ok(raw) = header.to_str() else {
        return GateOutcome::Rejected(GateRejection::MissingCredentials);
    };

    let (scheme, credentials) = raw.trim().split_once(' ').unwrap_or((raw.trim(), ""));
    let credentials = credentials.trim();

    if scheme != BEARER {
        return GateOutcome::Rejected(GateRejection::UnsupportedScheme);
    }
    if credentials.is_empty() {
        return GateOutcome::Rejected(GateRejection::MissingCredentials);
    }
    if !verify_fresh(credentials, now, security) {
        return GateOutcome::Rejected(GateRejection::InvalidBearer);
    }

    GateOutcome::Accepted(AuthToken {
        token: credentials.to_string(),
    })
}

/// Gate middleware; strict unless built with [`JwtAuth::lenient`].
#[derive(Debug, Clone, Copy)]
pub struct JwtAuth {
    strict: bool,
}

impl JwtAuth {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

impl Default for JwtAuth {
    fn default() -> Self {
        Self::strict()
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service,
            strict: self.strict,
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: S,
    strict: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let Some(app_state) = req.app_data::<web::Data<AppState>>().cloned() else {
            return Box::pin(async {
                Err(AppError::internal("AppState not available to credential gate").into())
            });
        };

        let outcome = evaluate_credentials(
            req.headers().get(header::AUTHORIZATION),
            self.strict,
            SystemTime::now(),
            &app_state.security,
        );

        match outcome {
            GateOutcome::Accepted(token) => {
                req.extensions_mut().insert(token);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            GateOutcome::Anonymous => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            GateOutcome::Rejected(rejection) => Box::pin(async move {
                // Rendered here so the response sees the request's trace scope
                security::credential_rejected(rejection.reason(), req.path());
                let response = AppError::from(rejection).error_response();
                Ok(req.into_response(response).map_into_right_body())
            }),
        }
    }
}
