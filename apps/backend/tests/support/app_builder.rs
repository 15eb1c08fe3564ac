use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use envoy_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use envoy_backend::routes;
use envoy_backend::state::app_state::AppState;

/// Build the production route table with the production middleware stack.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
