//! Token helpers for tests

use std::time::{Duration, SystemTime};

use envoy_backend::auth::jwt::{issue_token, issue_token_at};
use envoy_backend::state::security_config::SecurityConfig;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// Bearer token (without the "Bearer " prefix) valid from now
pub fn mint_test_token(user_id: &str, email: &str, sec: &SecurityConfig) -> String {
    issue_token(user_id, email, sec).expect("should mint token successfully")
}

/// Full Authorization header value
pub fn bearer_header(user_id: &str, email: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(user_id, email, sec))
}

/// Token whose validity window closed an hour ago
pub fn mint_expired_token(user_id: &str, email: &str, sec: &SecurityConfig) -> String {
    let issued = SystemTime::now() - sec.token_ttl - Duration::from_secs(3600);
    issue_token_at(user_id, email, issued, sec).expect("should mint expired token successfully")
}
