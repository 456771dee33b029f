//! ULID-based unique values so tests sharing a database never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Ulid::new())
}

/// `{prefix}-{ulid}@example.test`, lowercased so it survives email checks.
///
/// ```
/// use backend_test_support::unique_helpers::unique_email;
///
/// let a = unique_email("author");
/// assert_ne!(a, unique_email("author"));
/// assert!(a.ends_with("@example.test"));
/// ```
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.test", Ulid::new().to_string().to_lowercase())
}
