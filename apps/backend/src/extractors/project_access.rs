//! Role-gated project access for handlers.
//!
//! ```text
//! async fn handler(access: ProjectAccess<Editor>) -> Result<HttpResponse, AppError>
//! ```
//!
//! The handler only runs if the bearer token is valid and the caller's
//! effective role on `{project_id}` is at least the marker's role.

use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use super::current_user::CurrentUser;
use super::project_id::ProjectId;
use crate::domain::roles::ProjectRole;
use crate::error::AppError;
use crate::errors::domain::AuthError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Minimum role a [`ProjectAccess`] demands.
pub trait RoleRequirement {
    const MINIMUM: ProjectRole;
}

/// Project owner only.
#[derive(Debug, Clone, Copy)]
pub struct Owner;
/// Editors and owners.
#[derive(Debug, Clone, Copy)]
pub struct Editor;
/// Any project member.
#[derive(Debug, Clone, Copy)]
pub struct Viewer;

impl RoleRequirement for Owner {
    const MINIMUM: ProjectRole = ProjectRole::Owner;
}

impl RoleRequirement for Editor {
    const MINIMUM: ProjectRole = ProjectRole::Editor;
}

impl RoleRequirement for Viewer {
    const MINIMUM: ProjectRole = ProjectRole::Viewer;
}

/// Proof that `user` holds at least `R::MINIMUM` on `project_id`.
#[derive(Debug, Clone)]
pub struct ProjectAccess<R> {
    pub project_id: i64,
    pub user: CurrentUser,
    /// Effective role (may exceed the requirement)
    pub role: ProjectRole,
    _requirement: PhantomData<fn() -> R>,
}

async fn authorize<R: RoleRequirement>(req: HttpRequest) -> Result<ProjectAccess<R>, AppError> {
    let user = CurrentUser::from_req(&req)?;
    let ProjectId(project_id) = ProjectId::from_req(&req)?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let role = state
        .within_store_deadline(state.access.require(
            &project_id,
            user.user_id.as_str(),
            R::MINIMUM,
        ))
        .await
        .map_err(|e| {
            if matches!(e, AuthError::AccessDenied) {
                security::access_denied(project_id, &user.user_id, R::MINIMUM);
            }
            AppError::from(e)
        })?;

    tracing::debug!(project_id, role = %role, required = %R::MINIMUM, "project access granted");

    Ok(ProjectAccess {
        project_id,
        user,
        role,
        _requirement: PhantomData,
    })
}

impl<R: RoleRequirement + 'static> FromRequest for ProjectAccess<R> {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(authorize::<R>(req))
    }
}
