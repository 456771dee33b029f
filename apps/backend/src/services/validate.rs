//! Field rules shared by create and patch paths.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub const DESCRIPTION_CHARS: RangeInclusive<usize> = 40..=140;
pub const EXPERIENCE_LEVELS: RangeInclusive<i16> = 1..=3;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Length is counted in characters, not bytes.
pub fn description(value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if DESCRIPTION_CHARS.contains(&len) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!(
                "description must be between {} and {} characters",
                DESCRIPTION_CHARS.start(),
                DESCRIPTION_CHARS.end()
            ),
        ))
    }
}

pub fn experience(value: i16) -> Result<(), AppError> {
    if EXPERIENCE_LEVELS.contains(&value) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!(
                "experience must be between {} and {}",
                EXPERIENCE_LEVELS.start(),
                EXPERIENCE_LEVELS.end()
            ),
        ))
    }
}

pub fn email(value: &str) -> Result<(), AppError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::invalid(
            ErrorCode::InvalidEmail,
            "value is not a valid email address",
        ))
    }
}

pub fn non_empty_patch(is_empty: bool) -> Result<(), AppError> {
    if is_empty {
        Err(AppError::bad_request(
            ErrorCode::EmptyPatch,
            "At least one field must be provided",
        ))
    } else {
        Ok(())
    }
}
