//! Unit-test logging bootstrap.
//!
//! Delegates to the shared `backend-test-support` initializer so unit and
//! integration tests read the same `TEST_LOG` / `RUST_LOG` settings.

pub fn init() {
    backend_test_support::logging::init();
}
