use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Project id from the `{project_id}` path segment.
///
/// Only the shape is checked; whether the project exists is left to the
/// authorization step, so outsiders cannot probe for ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectId(pub i64);

impl ProjectId {
    pub fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let raw = req.match_info().get("project_id").ok_or_else(|| {
            AppError::bad_request(ErrorCode::InvalidProjectId, "Missing project_id parameter")
        })?;

        let project_id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidProjectId,
                format!("Invalid project id: {raw}"),
            )
        })?;

        if project_id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidProjectId,
                format!("Project id must be positive, got: {project_id}"),
            ));
        }

        Ok(ProjectId(project_id))
    }
}

impl FromRequest for ProjectId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
