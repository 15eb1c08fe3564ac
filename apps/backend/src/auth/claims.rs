//! Identity claims and the fixed token header.

use serde::{Deserialize, Serialize};

/// Claims carried by every access token issued by this backend.
///
/// Field order is part of the wire format: the signature is computed over
/// the encoded JSON, so serialization must stay canonical.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Opaque user identifier
    pub user_id: String,
    pub email: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
}

/// JOSE header. Only HS256 tokens are ever produced.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenHeader {
    pub alg: String,
    pub typ: String,
}

impl TokenHeader {
    pub fn hs256() -> Self {
        Self {
            alg: "HS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}
