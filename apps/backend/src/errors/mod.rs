//! Error handling for the envoy backend.

pub mod domain;
pub mod error_code;

pub use domain::{AuthError, StoreError, StoreErrorKind};
pub use error_code::ErrorCode;
