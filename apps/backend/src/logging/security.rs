//! Security audit events. Fields that may carry credentials or PII go
//! through [`Redacted`].

use tracing::{info, warn};

use crate::domain::roles::ProjectRole;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A bearer token failed validation.
pub fn token_rejected(reason: &str, token: &str) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        token = %Redacted(token),
        reason,
        "Bearer token rejected"
    );
}

/// An authenticated caller lacked the role an operation needs.
pub fn access_denied(project_id: i64, user_id: &str, required: ProjectRole) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ACCESS_DENIED",
        %trace_id,
        project_id,
        user_id = %Redacted(user_id),
        required = %required,
        "Project access denied"
    );
}
