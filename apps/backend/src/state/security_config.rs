use std::fmt;
use std::time::Duration;

/// Access tokens are valid for seven days and never refreshed in place.
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Configuration for token security settings
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Validity window stamped into each issued token
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl: TOKEN_TTL,
        }
    }
}

// The secret must never reach logs.
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::{SecurityConfig, TOKEN_TTL};

    #[test]
    fn ttl_is_seven_days() {
        assert_eq!(TOKEN_TTL.as_secs(), 604_800);
        assert_eq!(SecurityConfig::new("s").token_ttl, TOKEN_TTL);
    }

    #[test]
    fn debug_output_redacts_secret() {
        let rendered = format!("{:?}", SecurityConfig::new("hunter2-super-secret"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
