//! Stateless access tokens: segment codec, HMAC signer and the
//! issue/validate service built on them.

pub mod claims;
pub mod codec;
pub mod jwt;
pub mod signer;

pub use claims::{Claims, TokenHeader};
pub use jwt::{issue_token, issue_token_at, validate_token, validate_token_at};
