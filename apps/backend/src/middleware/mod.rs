pub mod cors;
pub mod jwt_auth;
pub mod request_trace;
pub mod structured_logger;

pub use cors::cors_middleware;
pub use jwt_auth::JwtAuth;
pub use request_trace::RequestTrace;
pub use structured_logger::StructuredLogger;
