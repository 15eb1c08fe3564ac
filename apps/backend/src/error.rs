use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{AuthError, StoreError};
use crate::errors::ErrorCode;
use crate::trace_ctx;

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Store unavailable: {source}")]
    StoreUnavailable {
        #[source]
        source: StoreError,
    },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::UnauthorizedMissingBearer => ErrorCode::UnauthorizedMissingBearer,
            AppError::UnauthorizedInvalidJwt => ErrorCode::UnauthorizedInvalidJwt,
            AppError::UnauthorizedExpiredJwt => ErrorCode::UnauthorizedExpiredJwt,
            AppError::Forbidden { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::StoreUnavailable { .. } => ErrorCode::StoreUnavailable,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Client-facing detail. Backend failure details stay in the logs.
    pub fn detail(&self) -> String {
        match self {
            AppError::UnauthorizedMissingBearer => "Missing or malformed Bearer token".to_string(),
            AppError::UnauthorizedInvalidJwt => "Invalid JWT".to_string(),
            AppError::UnauthorizedExpiredJwt => "Token expired".to_string(),
            AppError::Forbidden { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            AppError::StoreUnavailable { .. } => {
                "Membership store is temporarily unavailable".to_string()
            }
            AppError::DbUnavailable => "Database unavailable".to_string(),
            AppError::Db { .. } => "Database error".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnauthorizedMissingBearer => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedInvalidJwt => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedExpiredJwt => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        Self::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        Self::UnauthorizedExpiredJwt
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MalformedToken | AuthError::InvalidSignature => {
                AppError::UnauthorizedInvalidJwt
            }
            AuthError::ExpiredToken => AppError::UnauthorizedExpiredJwt,
            AuthError::AccessDenied => AppError::forbidden(
                ErrorCode::InsufficientRole,
                "Insufficient role for this operation",
            ),
            // Same status as AccessDenied so project existence is not revealed.
            AuthError::NotMember => {
                AppError::forbidden(ErrorCode::NotAMember, "Not a member of this project")
            }
            AuthError::Store(source) => AppError::StoreUnavailable { source },
            AuthError::TimeOutOfRange => AppError::internal("token timestamp out of range"),
            AuthError::Encoding(e) => AppError::internal(format!("token encoding failed: {e}")),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(source: StoreError) -> Self {
        AppError::StoreUnavailable { source }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::Db {
            detail: e.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            tracing::error!(code = %code, error = %self, trace_id = %trace_id, "request failed");
        } else {
            tracing::debug!(code = %code, error = %self, trace_id = %trace_id, "request rejected");
        }

        let problem_details = ProblemDetails {
            type_: format!("https://envoy.app/errors/{}", code.as_str()),
            title: Self::humanize_code(code.as_str()),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.as_str().to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}
