//! Token segment codec: canonical JSON wrapped in unpadded Base64URL.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64url segment: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("segment does not match expected schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` to JSON and encode it as a token segment.
///
/// Serialization of the plain structs used for tokens cannot fail, so this
/// returns a `serde_json::Error` only for exotic inputs (e.g. maps with
/// non-string keys).
pub fn encode_segment<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(value)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Inverse of [`encode_segment`].
pub fn decode_segment<T: DeserializeOwned>(segment: &str) -> Result<T, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(segment)?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::{decode_segment, encode_segment, DecodeError};
    use crate::auth::claims::{Claims, TokenHeader};

    #[test]
    fn header_encodes_to_the_well_known_jwt_prefix() {
        let encoded = encode_segment(&TokenHeader::hs256()).unwrap();
        assert_eq!(encoded, "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    }

    #[test]
    fn encoding_is_deterministic() {
        let claims = Claims {
            user_id: "u1".into(),
            email: "a@b.com".into(),
            exp: 10,
            iat: 5,
        };
        assert_eq!(
            encode_segment(&claims).unwrap(),
            encode_segment(&claims.clone()).unwrap()
        );
    }

    #[test]
    fn encoded_segment_is_url_safe_and_unpadded() {
        // "??>" style payloads produce '+' and '/' in standard base64
        let claims = Claims {
            user_id: "???>>>".into(),
            email: "~~~@b.com".into(),
            exp: 0,
            iat: 0,
        };
        let encoded = encode_segment(&claims).unwrap();
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(decode_segment::<Claims>(&encoded).unwrap(), claims);
    }

    #[test]
    fn padded_input_is_rejected() {
        let err = decode_segment::<TokenHeader>("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9==").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn invalid_characters_are_rejected() {
        let err = decode_segment::<TokenHeader>("eyJhbGci*iJIUzI1NiJ9").unwrap_err();
        assert!(matches!(err, DecodeError::Base64(_)));
    }

    #[test]
    fn schema_mismatch_is_a_json_error() {
        // valid base64url of {"alg":"HS256"} which lacks `typ`
        let encoded = encode_segment(&serde_json::json!({"alg": "HS256"})).unwrap();
        let err = decode_segment::<TokenHeader>(&encoded).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }
}
