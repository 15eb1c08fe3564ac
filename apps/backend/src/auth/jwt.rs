use std::time::{SystemTime, UNIX_EPOCH};

use crate::auth::claims::{Claims, TokenHeader};
use crate::auth::codec::{decode_segment, encode_segment};
use crate::auth::signer;
use crate::errors::domain::AuthError;
use crate::state::security_config::SecurityConfig;

/// Seconds since the unix epoch; negative for instants before it.
pub fn unix_seconds(t: SystemTime) -> Result<i64, AuthError> {
    let secs = match t.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_secs()).ok(),
        Err(e) => i64::try_from(e.duration().as_secs()).ok().map(|s| -s),
    };
    secs.ok_or(AuthError::TimeOutOfRange)
}

/// Encode and sign an arbitrary claims set as `header.claims.signature`.
pub fn sign_claims(claims: &Claims, security: &SecurityConfig) -> Result<String, AuthError> {
    let header = encode_segment(&TokenHeader::hs256())?;
    let payload = encode_segment(claims)?;
    let message = format!("{header}.{payload}");
    let signature = signer::sign(&message, &security.jwt_secret);
    Ok(format!("{message}.{signature}"))
}

/// Mint an HS256 access token valid for `security.token_ttl` from `now`.
pub fn issue_token_at(
    user_id: &str,
    email: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AuthError> {
    let iat = unix_seconds(now)?;
    let exp = i64::try_from(security.token_ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or(AuthError::TimeOutOfRange)?;
    let claims = Claims {
        user_id: user_id.to_string(),
        email: email.to_string(),
        iat,
        exp,
    };
    sign_claims(&claims, security)
}

/// Mint an access token stamped with the current time.
pub fn issue_token(
    user_id: &str,
    email: &str,
    security: &SecurityConfig,
) -> Result<String, AuthError> {
    issue_token_at(user_id, email, SystemTime::now(), security)
}

/// Validate `token` as of `now` and return its claims.
///
/// Checks run in a fixed order so each failure has exactly one kind:
/// - not three segments → `MalformedToken`
/// - signature mismatch → `InvalidSignature`
/// - undecodable claims → `MalformedToken`
/// - `now > exp` → `ExpiredToken`
pub fn validate_token_at(
    token: &str,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<Claims, AuthError> {
    let mut parts = token.split('.');
    let (header, payload, signature) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(h), Some(p), Some(s), None) => (h, p, s),
        _ => return Err(AuthError::MalformedToken),
    };

    // The signed message is the exact text received, not a re-encoding.
    let message_len = header.len() + 1 + payload.len();
    let message = &token[..message_len];
    if !signer::verify(message, &security.jwt_secret, signature) {
        return Err(AuthError::InvalidSignature);
    }

    let claims: Claims = decode_segment(payload).map_err(|_| AuthError::MalformedToken)?;

    if unix_seconds(now)? > claims.exp {
        return Err(AuthError::ExpiredToken);
    }

    Ok(claims)
}

/// Validate `token` against the current time.
pub fn validate_token(token: &str, security: &SecurityConfig) -> Result<Claims, AuthError> {
    validate_token_at(token, SystemTime::now(), security)
}
