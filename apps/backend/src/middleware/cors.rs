use std::env;

use actix_cors::Cors;
use actix_web::http::header;

use crate::trace_ctx::TRACE_ID_HEADER;

const FALLBACK_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Comma-separated origins from `CORS_ALLOWED_ORIGINS`; empty, "null" and
/// non-http(s) entries are dropped.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.trim_end_matches('/').to_string())
        .collect()
}

/// Restrictive CORS: explicit origins, only the methods the API serves.
pub fn cors_middleware() -> Cors {
    let configured = parse_allowed_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
    let origins: Vec<String> = if configured.is_empty() {
        FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_ID_HEADER)])
        .supports_credentials()
        .max_age(3600);

    for origin in &origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
