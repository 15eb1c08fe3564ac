//! Core authentication/authorization error types.
//!
//! These are HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert with the provided
//! `From<AuthError> for AppError` implementation.

use std::time::Duration;

use thiserror::Error;

/// Operational failure kinds reported by a membership store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorKind {
    Timeout,
    Unavailable,
    Other,
}

/// Opaque failure of the membership store. Never a denial.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("membership store {kind:?}: {detail}")]
pub struct StoreError {
    pub kind: StoreErrorKind,
    pub detail: String,
}

impl StoreError {
    pub fn new(kind: StoreErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn timeout(after: Duration) -> Self {
        Self::new(
            StoreErrorKind::Timeout,
            format!("query exceeded {}ms", after.as_millis()),
        )
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Unavailable, detail)
    }

    pub fn other(detail: impl Into<String>) -> Self {
        Self::new(StoreErrorKind::Other, detail)
    }
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e {
            sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
                StoreError::unavailable(e.to_string())
            }
            other => StoreError::other(other.to_string()),
        }
    }
}

/// Every way token validation or project authorization can fail.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token does not have three segments or its claims cannot be decoded
    #[error("malformed token")]
    MalformedToken,
    /// Recomputed signature differs (tampering or wrong secret)
    #[error("invalid token signature")]
    InvalidSignature,
    #[error("expired token")]
    ExpiredToken,
    /// Authenticated, but the role is below what the operation needs
    #[error("access denied")]
    AccessDenied,
    /// Neither owner nor explicit member of the project
    #[error("user is not a project member")]
    NotMember,
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Clock value or expiry does not fit in signed unix seconds
    #[error("timestamp out of range")]
    TimeOutOfRange,
    /// Claims could not be serialized while issuing a token
    #[error("failed to encode token: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl AuthError {
    /// True for the kinds produced by token validation.
    pub fn is_token_error(&self) -> bool {
        matches!(
            self,
            AuthError::MalformedToken | AuthError::InvalidSignature | AuthError::ExpiredToken
        )
    }
}
