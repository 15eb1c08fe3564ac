#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
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

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::memberships_sea::SeaMembershipStore;
pub use auth::claims::Claims;
pub use auth::jwt::{issue_token, issue_token_at, validate_token, validate_token_at};
pub use config::AppConfig;
pub use domain::roles::ProjectRole;
pub use error::AppError;
pub use errors::domain::{AuthError, StoreError, StoreErrorKind};
pub use extractors::{AuthToken, CurrentUser, ProjectAccess, ProjectId};
pub use infra::db::connect_db;
pub use middleware::{RequestTrace, StructuredLogger, TraceSpan};
pub use repos::memberships::{MembershipStore, SharedMembershipStore};
pub use repos::memberships_memory::InMemoryMembershipStore;
pub use services::access_guard::AccessGuard;
pub use services::access_resolver::AccessResolver;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
