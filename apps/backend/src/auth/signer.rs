//! HMAC-SHA256 signing of `header.claims` messages.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Sign `message` with `secret`, returning the unpadded Base64URL MAC.
///
/// Deterministic: the same message and secret always give the same output.
pub fn sign(message: &str, secret: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

/// Recompute the signature for `message` and compare it with `signature`
/// in constant time.
pub fn verify(message: &str, secret: &[u8], signature: &str) -> bool {
    let expected = sign(message, secret);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}
