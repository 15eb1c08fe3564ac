//! Error codes for the envoy backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in problem-details responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token is malformed or its signature does not verify
    UnauthorizedInvalidJwt,
    /// Token is past its expiry
    UnauthorizedExpiredJwt,

    // Authorization
    /// User has no ownership or membership on the project
    NotAMember,
    /// User's role is below what the operation needs
    InsufficientRole,
    /// Project owners are implicit and cannot also be explicit members
    OwnerIsNotAMember,

    // Request Validation
    InvalidProjectId,
    InvalidUserId,
    BadRequest,

    // Resource Not Found
    ProjectNotFound,
    MemberNotFound,

    // System Errors
    /// Membership store failed or timed out
    StoreUnavailable,
    DbUnavailable,
    DbError,
    ConfigError,
    InternalError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::NotAMember => "NOT_A_MEMBER",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::OwnerIsNotAMember => "OWNER_IS_NOT_A_MEMBER",

            Self::InvalidProjectId => "INVALID_PROJECT_ID",
            Self::InvalidUserId => "INVALID_USER_ID",
            Self::BadRequest => "BAD_REQUEST",

            Self::ProjectNotFound => "PROJECT_NOT_FOUND",
            Self::MemberNotFound => "MEMBER_NOT_FOUND",

            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbError => "DB_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
