pub mod auth_token;
pub mod validated_json;

pub use auth_token::AuthToken;
pub use validated_json::ValidatedJson;
