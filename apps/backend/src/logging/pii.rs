use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Compiled redaction patterns, applied in declaration order.
struct Patterns {
    email: Regex,
    /// Three dot-separated base64url segments: a compact JWS
    jwt: Regex,
    base64_token: Regex,
    hex_token: Regex,
}

// Literal patterns; covered by the tests below.
#[allow(clippy::unwrap_used)]
static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
    email: Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap(),
    jwt: Regex::new(r"\b[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}").unwrap(),
    base64_token: Regex::new(r"\b[A-Za-z0-9+/]{16,}={0,2}\b").unwrap(),
    hex_token: Regex::new(r"\b[A-Fa-f0-9]{16,}\b").unwrap(),
});

fn mask_email(caps: &Captures<'_>) -> String {
    let full = &caps[0];
    match full.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("@{domain}"),
        },
        None => full.to_string(),
    }
}

/// Mask emails and bearer material before a string reaches the logs.
///
/// Emails keep their first character and full domain. Signed tokens become
/// `[REDACTED_JWT]`; other long base64 or hex runs become `[REDACTED_TOKEN]`.
pub fn redact(input: &str) -> String {
    let p = &*PATTERNS;
    let out = p.email.replace_all(input, mask_email);
    let out = p.jwt.replace_all(&out, "[REDACTED_JWT]");
    let out = p.base64_token.replace_all(&out, "[REDACTED_TOKEN]");
    p.hex_token.replace_all(&out, "[REDACTED_TOKEN]").into_owned()
}

/// Display wrapper that redacts on format, for use in `tracing` fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{redact, Redacted};

    const TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
eyJ1c2VyX2lkIjoidTEiLCJlbWFpbCI6ImFAYi5jb20iLCJleHAiOjEsImlhdCI6MH0.\
W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM";

    #[test]
    fn emails_keep_first_char_and_domain() {
        assert_eq!(redact("user@example.com"), "u***@example.com");
        assert_eq!(redact("a@test.org"), "a***@test.org");
        assert_eq!(
            redact("owner a@b.com shared with viewer@sub.example.com"),
            "owner a***@b.com shared with v***@sub.example.com"
        );
    }

    #[test]
    fn whole_tokens_are_masked() {
        assert_eq!(redact(TOKEN), "[REDACTED_JWT]");
        assert_eq!(
            redact(&format!("Bearer {TOKEN} rejected")),
            "Bearer [REDACTED_JWT] rejected"
        );
    }

    #[test]
    fn opaque_runs_are_masked() {
        assert_eq!(
            redact("secret a1b2c3d4e5f678901234567890123456"),
            "secret [REDACTED_TOKEN]"
        );
        assert_eq!(redact("short123"), "short123");
    }

    #[test]
    fn ordinary_text_is_untouched() {
        assert_eq!(redact("project 42 role editor"), "project 42 role editor");
        assert_eq!(redact(""), "");
    }

    #[test]
    fn wrapper_redacts_in_display_and_debug() {
        let wrapped = Redacted("admin@test.org");
        assert_eq!(format!("{wrapped}"), "a***@test.org");
        assert_eq!(format!("{wrapped:?}"), "a***@test.org");
    }
}
