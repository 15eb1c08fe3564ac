//! Problem Details assertions that do not depend on backend types.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Mirror of the backend's problem-details body.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert that `resp` is an error response with the stable contract:
/// expected status and code, `application/problem+json`, and a body
/// `trace_id` equal to the `x-trace-id` header. Returns the parsed body.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
) -> ProblemDetailsLike {
    assert_eq!(resp.status(), expected_status);

    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("application/problem+json"));

    let trace_header = resp
        .headers()
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-trace-id header should be present");

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemDetailsLike =
        serde_json::from_slice(&body).expect("body should be problem details JSON");

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(
        problem.trace_id, trace_header,
        "trace_id in body should match x-trace-id header"
    );

    problem
}
