//! Error codes for the portfolio backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Email unknown or password wrong (deliberately indistinguishable)
    InvalidCredentials,
    /// Refresh token failed verification
    InvalidRefreshToken,
    /// Authorization header uses a scheme other than Bearer
    UnsupportedAuthScheme,
    /// Bearer token failed verification or is expired
    InvalidBearerToken,
    /// No Authorization header was presented
    MissingCredentials,

    // Request Validation
    /// Invalid email address
    InvalidEmail,
    /// Field-level validation failure
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Patch body without any field set
    EmptyPatch,

    // Resource Not Found
    UserNotFound,
    ArticleNotFound,
    ProjectNotFound,
    SkillNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Email already registered
    EmailTaken,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::UnsupportedAuthScheme => "UNSUPPORTED_AUTH_SCHEME",
            Self::InvalidBearerToken => "INVALID_BEARER_TOKEN",
            Self::MissingCredentials => "MISSING_CREDENTIALS",

            Self::InvalidEmail => "INVALID_EMAIL",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::EmptyPatch => "EMPTY_PATCH",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ArticleNotFound => "ARTICLE_NOT_FOUND",
            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::SkillNotFound => "SKILL_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::EmailTaken => "EMAIL_TAKEN",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
