//! Task-local trace id for the request being served.
//!
//! `RequestTrace` opens the scope; `AppError::error_response` reads it so the
//! problem-details body and the `x-trace-id` header agree with the request
//! logs. Core auth code never touches this.

use std::future::Future;

use tokio::task_local;

/// Returned when no request scope is active.
pub const UNKNOWN_TRACE_ID: &str = "unknown";

task_local! {
    static TRACE_ID: String;
}

/// Trace id of the current request, or [`UNKNOWN_TRACE_ID`].
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(Clone::clone)
        .unwrap_or_else(|_| UNKNOWN_TRACE_ID.to_string())
}

/// Run `future` with `trace_id` visible to [`trace_id()`].
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: Future<Output = R>,
{
    TRACE_ID.scope(trace_id, future).await
}
