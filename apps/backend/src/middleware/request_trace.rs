//! Assigns each request a trace id.
//!
//! The id is stored in request extensions as [`TraceId`], made visible to
//! [`crate::trace_ctx`] for the lifetime of the downstream future, and echoed
//! back in the `x-request-id` response header.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    HttpMessage,
};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

use crate::trace_ctx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request trace id stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceId(pub String);

impl TraceId {
    /// Trace id attached to `req`, if `RequestTrace` ran.
    pub fn of(req: &ServiceRequest) -> Option<String> {
        req.extensions().get::<TraceId>().map(|t| t.0.clone())
    }
}

pub struct RequestTrace;

impl<S, B> Transform<S, ServiceRequest> for RequestTrace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RequestTraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTraceMiddleware { service }))
    }
}

pub struct RequestTraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestTraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = Uuid::new_v4().to_string();
        req.extensions_mut().insert(TraceId(trace_id.clone()));

        let fut = self.service.call(req);

        Box::pin(trace_ctx::with_trace_id(trace_id.clone(), async move {
            let mut res = fut.await?;

            res.headers_mut().insert(
                HeaderName::from_static(REQUEST_ID_HEADER),
                HeaderValue::from_str(&trace_id)
                    .unwrap_or_else(|_| HeaderValue::from_static("invalid-uuid")),
            );

            Ok(res)
        }))
    }
}
