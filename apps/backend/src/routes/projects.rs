//! Project role and membership endpoints.
//!
//! Every handler authorizes before touching the database: reads need any
//! project role, membership changes need ownership.

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use sea_orm::TransactionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::memberships_sea::{self, MembershipUpsert};
use crate::db::require_db;
use crate::domain::roles::ProjectRole;
use crate::entities::project_users::{self, MemberRole};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{CurrentUser, Owner, ProjectAccess, ProjectId, Viewer};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub project_id: i64,
    pub user_id: String,
    pub role: ProjectRole,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub user_id: String,
    pub role: MemberRole,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<project_users::Model> for MemberResponse {
    fn from(m: project_users::Model) -> Self {
        Self {
            user_id: m.user_id,
            role: m.role,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MembersResponse {
    pub project_id: i64,
    pub owner_id: String,
    pub members: Vec<MemberResponse>,
}

#[derive(Debug, Deserialize)]
pub struct MemberPath {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SetMemberRequest {
    pub role: MemberRole,
}

/// GET /api/projects/{project_id}/role
///
/// The caller's effective role. Outsiders get 403 `NOT_A_MEMBER`.
async fn my_role(
    user: CurrentUser,
    project_id: ProjectId,
    app_state: web::Data<AppState>,
) -> Result<web::Json<RoleResponse>, AppError> {
    let ProjectId(project_id) = project_id;
    let role = app_state
        .within_store_deadline(
            app_state
                .access
                .get_role(&project_id, user.user_id.as_str()),
        )
        .await?;

    Ok(web::Json(RoleResponse {
        project_id,
        user_id: user.user_id,
        role,
    }))
}

/// GET /api/projects/{project_id}/members
async fn list_members(
    access: ProjectAccess<Viewer>,
    app_state: web::Data<AppState>,
) -> Result<web::Json<MembersResponse>, AppError> {
    let db = require_db(&app_state)?;

    let project = memberships_sea::find_project(db, access.project_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ProjectNotFound,
                format!("Project {} not found", access.project_id),
            )
        })?;
    let members = memberships_sea::list_members(db, access.project_id).await?;

    Ok(web::Json(MembersResponse {
        project_id: project.id,
        owner_id: project.owner_id,
        members: members.into_iter().map(MemberResponse::from).collect(),
    }))
}

/// PUT /api/projects/{project_id}/members/{user_id}
///
/// Adds the member (201) or changes their role (200).
async fn set_member(
    access: ProjectAccess<Owner>,
    path: web::Path<MemberPath>,
    body: web::Json<SetMemberRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = validate_user_id(&path.user_id)?;
    let db = require_db(&app_state)?;

    let txn = db.begin().await?;

    let project = memberships_sea::find_project(&txn, access.project_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::ProjectNotFound,
                format!("Project {} not found", access.project_id),
            )
        })?;
    if project.owner_id == user_id {
        return Err(AppError::conflict(
            ErrorCode::OwnerIsNotAMember,
            "The project owner already has full access and cannot be added as a member",
        ));
    }

    let existed = memberships_sea::find_membership(&txn, access.project_id, &user_id)
        .await?
        .is_some();
    let member = memberships_sea::upsert_membership(
        &txn,
        MembershipUpsert::new(access.project_id, user_id, body.into_inner().role),
    )
    .await?;

    txn.commit().await?;

    tracing::info!(
        project_id = access.project_id,
        role = ?member.role,
        created = !existed,
        "project membership saved"
    );

    let status = if existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok(HttpResponse::build(status).json(MemberResponse::from(member)))
}

/// DELETE /api/projects/{project_id}/members/{user_id}
async fn remove_member(
    access: ProjectAccess<Owner>,
    path: web::Path<MemberPath>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = validate_user_id(&path.user_id)?;
    let db = require_db(&app_state)?;

    if !memberships_sea::remove_membership(db, access.project_id, &user_id).await? {
        return Err(AppError::not_found(
            ErrorCode::MemberNotFound,
            format!("User is not a member of project {}", access.project_id),
        ));
    }

    tracing::info!(project_id = access.project_id, "project membership removed");
    Ok(HttpResponse::NoContent().finish())
}

fn validate_user_id(user_id: &str) -> Result<String, AppError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() || trimmed.len() > 255 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidUserId,
            "User id must be between 1 and 255 characters",
        ));
    }
    Ok(trimmed.to_string())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/{project_id}/role", web::get().to(my_role))
        .route("/{project_id}/members", web::get().to(list_members))
        .route("/{project_id}/members/{user_id}", web::put().to(set_member))
        .route(
            "/{project_id}/members/{user_id}",
            web::delete().to(remove_member),
        );
}
