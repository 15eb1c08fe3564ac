//! Test logging for the envoy backend.
//!
//! Filter precedence: `TEST_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
//! Blank values are skipped. `TEST_LOG_FORMAT=json` switches to the same JSON
//! lines the server writes, which helps when checking structured fields.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Quiet by default; sqlite adapter tests would otherwise echo every query.
pub const DEFAULT_FILTER: &str = "warn,sqlx=error,sea_orm_migration=error";

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter_directives(test_log: Option<String>, rust_log: Option<String>) -> String {
    let non_blank = |v: String| (!v.trim().is_empty()).then_some(v);
    test_log
        .and_then(non_blank)
        .or_else(|| rust_log.and_then(non_blank))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// Install the test subscriber once per process. Safe to call from every
/// test and from `ctor` hooks.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let directives = filter_directives(
            std::env::var("TEST_LOG").ok(),
            std::env::var("RUST_LOG").ok(),
        );
        let filter = EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let json = std::env::var("TEST_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

        // try_init: another harness may already own the global subscriber
        if json {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_test_writer()
                .try_init()
                .ok();
        } else {
            fmt()
                .with_env_filter(filter)
                .with_test_writer()
                .without_time()
                .try_init()
                .ok();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::{filter_directives, DEFAULT_FILTER};

    #[test]
    fn test_log_wins_over_rust_log() {
        let got = filter_directives(Some("debug".into()), Some("info".into()));
        assert_eq!(got, "debug");
    }

    #[test]
    fn blank_values_fall_through() {
        assert_eq!(
            filter_directives(Some("  ".into()), Some("info".into())),
            "info"
        );
        assert_eq!(filter_directives(Some(String::new()), None), DEFAULT_FILTER);
        assert_eq!(filter_directives(None, None), DEFAULT_FILTER);
    }
}
