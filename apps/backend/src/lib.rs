#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

pub use auth::claims::{Claims, TokenKind};
pub use auth::jwt::{decode_token, mint_token, mint_token_pair, verify_fresh, TokenPair};
pub use config::db::DbProfile;
pub use error::AppError;
pub use extractors::auth_token::AuthToken;
pub use infra::state::build_state;
pub use middleware::cors::cors_middleware;
pub use middleware::jwt_auth::JwtAuth;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Unit tests log through the same subscriber as the integration suites
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
