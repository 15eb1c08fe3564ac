//! Unique test identities so tests sharing a store never collide.

use uuid::Uuid;

/// `{prefix}-{uuid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("user");
/// assert!(a.starts_with("user-"));
/// assert_ne!(a, unique_str("user"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

/// `{prefix}-{uuid}@example.test`
pub fn unique_email(prefix: &str) -> String {
    format!("{}@example.test", unique_str(prefix))
}
