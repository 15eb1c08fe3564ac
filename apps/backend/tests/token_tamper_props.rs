//! Any single-character change to a token is rejected.

mod common;
mod support;

include!("common/proptest_prelude.rs");

use envoy_backend::auth::jwt::{issue_token, validate_token};
use envoy_backend::errors::domain::AuthError;
use envoy_backend::state::security_config::SecurityConfig;
use proptest::prelude::*;
use proptest::sample::Index;
use support::auth::test_security;

/// Characters a token can contain, plus the segment separator.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_.";

fn user_id() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,24}"
}

fn email() -> impl Strategy<Value = String> {
    ("[a-z]{1,12}", "[a-z]{1,12}").prop_map(|(local, domain)| format!("{local}@{domain}.test"))
}

/// Replace the byte at `pos` with a different alphabet byte.
fn flip(token: &str, pos: usize, shift: usize) -> String {
    let mut bytes = token.as_bytes().to_vec();
    let current = ALPHABET
        .iter()
        .position(|&c| c == bytes[pos])
        .expect("token bytes come from the alphabet");
    // shift in 1..len, so the replacement always differs
    bytes[pos] = ALPHABET[(current + shift) % ALPHABET.len()];
    String::from_utf8(bytes).expect("alphabet is ascii")
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn single_char_tamper_is_rejected(
        user_id in user_id(),
        email in email(),
        pos in any::<Index>(),
        shift in 1..ALPHABET.len(),
    ) {
        let security = test_security();
        let token = issue_token(&user_id, &email, &security).unwrap();
        let tampered = flip(&token, pos.index(token.len()), shift);

        let result = validate_token(&tampered, &security);
        prop_assert!(
            matches!(result, Err(AuthError::MalformedToken) | Err(AuthError::InvalidSignature)),
            "tampered token accepted or misclassified: {:?}",
            result
        );
    }

    #[test]
    fn round_trip_preserves_identity(user_id in user_id(), email in email()) {
        let security = test_security();
        let token = issue_token(&user_id, &email, &security).unwrap();
        let claims = validate_token(&token, &security).unwrap();

        prop_assert_eq!(claims.user_id, user_id);
        prop_assert_eq!(claims.email, email);
        prop_assert_eq!(claims.exp, claims.iat + 604_800);
    }

    #[test]
    fn other_secrets_never_verify(
        user_id in user_id(),
        secret_a in "[a-zA-Z0-9]{1,32}",
        suffix in "[a-z]{1,4}",
    ) {
        // A strict extension is always a different key.
        let secret_b = format!("{secret_a}{suffix}");
        let token = issue_token(&user_id, "x@y.test", &SecurityConfig::new(secret_a)).unwrap();

        prop_assert!(matches!(
            validate_token(&token, &SecurityConfig::new(secret_b)),
            Err(AuthError::InvalidSignature)
        ));
    }
}
