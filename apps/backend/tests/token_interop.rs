//! Tokens interoperate with a standard HS256 JWT implementation.

mod common;
mod support;

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use envoy_backend::auth::claims::Claims;
use envoy_backend::auth::jwt::{issue_token, validate_token, validate_token_at};
use envoy_backend::errors::domain::AuthError;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use support::auth::{test_security, TEST_SECRET};

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs() as i64
}

#[test]
fn standard_library_accepts_our_tokens() {
    let token = issue_token("u1", "a@b.com", &test_security()).unwrap();

    let decoded = decode::<Claims>(
        &token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .expect("standard HS256 validation should accept the token");

    assert_eq!(decoded.claims.user_id, "u1");
    assert_eq!(decoded.claims.email, "a@b.com");
    assert_eq!(decoded.claims.exp - decoded.claims.iat, 604_800);
    assert_eq!(decoded.header.alg, Algorithm::HS256);
}

#[test]
fn we_accept_standard_library_tokens() {
    let iat = now_secs();
    let claims = Claims {
        user_id: "u2".to_string(),
        email: "c@d.org".to_string(),
        exp: iat + 3600,
        iat,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    assert_eq!(validate_token(&token, &test_security()).unwrap(), claims);
}

#[test]
fn standard_library_token_with_wrong_secret_is_invalid_signature() {
    let iat = now_secs();
    let claims = Claims {
        user_id: "u2".to_string(),
        email: "c@d.org".to_string(),
        exp: iat + 3600,
        iat,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"someone-else"),
    )
    .unwrap();

    assert!(matches!(
        validate_token(&token, &test_security()),
        Err(AuthError::InvalidSignature)
    ));
}

#[test]
fn standard_library_token_expires_on_our_clock() {
    let iat = 1_700_000_000;
    let claims = Claims {
        user_id: "u3".to_string(),
        email: "e@f.net".to_string(),
        exp: iat + 10,
        iat,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let at = |secs: i64| UNIX_EPOCH + Duration::from_secs(secs as u64);
    assert!(validate_token_at(&token, at(iat + 10), &test_security()).is_ok());
    assert!(matches!(
        validate_token_at(&token, at(iat + 11), &test_security()),
        Err(AuthError::ExpiredToken)
    ));
}
