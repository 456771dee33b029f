//! One tracing subscriber per test binary, installed on first use.
//!
//! `TEST_LOG` (falling back to `RUST_LOG`) picks the filter, default `warn`.
//! `TEST_LOG_FORMAT=json` switches to the production JSON layout, handy when
//! checking which fields a log event carries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

pub fn init() {
    INSTALLED.get_or_init(|| {
        let json = std::env::var("TEST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
        let builder = fmt().with_env_filter(filter()).with_test_writer();

        // Another harness may already own the global subscriber
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.without_time().with_target(false).try_init()
        };
    });
}
