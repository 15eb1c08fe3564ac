//! One structured log line per completed request.
//!
//! Server errors log at `error`, client errors at `warn`, the rest at `info`.
//! Only the route pattern is logged, never the raw Authorization header.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn};

use super::request_trace::TraceId;

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());
        let trace_id = TraceId::of(&req).unwrap_or_else(|| "unknown".to_string());

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            // Path params are only populated once the router has matched.
            let (status, project_id) = match &result {
                Ok(res) => (
                    res.status(),
                    res.request().match_info().get("project_id").map(str::to_owned),
                ),
                Err(err) => (err.as_response_error().status_code(), None),
            };
            let duration_us = start.elapsed().as_micros() as u64;
            let status_code = status.as_u16();
            let project_id = project_id.as_deref().unwrap_or("-");

            if status.is_server_error() {
                error!(http.method=%method, http.route=%route, project_id=%project_id, http.status_code=%status_code, duration_us=%duration_us, trace_id=%trace_id, message="request_completed");
            } else if status.is_client_error() {
                warn!(http.method=%method, http.route=%route, project_id=%project_id, http.status_code=%status_code, duration_us=%duration_us, trace_id=%trace_id, message="request_completed");
            } else {
                info!(http.method=%method, http.route=%route, project_id=%project_id, http.status_code=%status_code, duration_us=%duration_us, trace_id=%trace_id, message="request_completed");
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::Arc;

    use actix_web::{test, web, App, HttpResponse};
    use parking_lot::Mutex;
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    use super::StructuredLogger;

    /// Collects the `project_id` of every `request_completed` event.
    #[derive(Clone, Default)]
    struct CompletedRequests(Arc<Mutex<Vec<String>>>);

    #[derive(Default)]
    struct Fields {
        message: Option<String>,
        project_id: Option<String>,
    }

    impl Visit for Fields {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "message" {
                self.message = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            match field.name() {
                "message" => self.message = Some(format!("{value:?}")),
                "project_id" => self.project_id = Some(format!("{value:?}")),
                _ => {}
            }
        }
    }

    impl<S: tracing::Subscriber> Layer<S> for CompletedRequests {
        fn on_event(&self, event: &tracing::Event<'_>, _: Context<'_, S>) {
            let mut fields = Fields::default();
            event.record(&mut fields);
            if fields.message.as_deref() == Some("request_completed") {
                if let Some(project_id) = fields.project_id {
                    self.0.lock().push(project_id);
                }
            }
        }
    }

    #[actix_web::test]
    async fn logs_the_routed_project_id() {
        let seen = CompletedRequests::default();
        let _guard =
            tracing::subscriber::set_default(tracing_subscriber::registry().with(seen.clone()));

        let app = test::init_service(
            App::new()
                .wrap(StructuredLogger)
                .route(
                    "/projects/{project_id}/ping",
                    web::get().to(|| async { HttpResponse::Ok().finish() }),
                )
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        for uri in ["/projects/42/ping", "/ping"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert!(resp.status().is_success());
        }

        assert_eq!(*seen.0.lock(), vec!["42".to_string(), "-".to_string()]);
    }
}
