//! DTOs for memberships_sea adapter.

use crate::entities::project_users::MemberRole;

/// DTO for creating a project.
#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub name: String,
    pub owner_id: String,
}

impl ProjectCreate {
    pub fn new(name: impl Into<String>, owner_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner_id: owner_id.into(),
        }
    }
}

/// DTO for granting or changing a member's role.
#[derive(Debug, Clone)]
pub struct MembershipUpsert {
    pub project_id: i64,
    pub user_id: String,
    pub role: MemberRole,
}

impl MembershipUpsert {
    pub fn new(project_id: i64, user_id: impl Into<String>, role: MemberRole) -> Self {
        Self {
            project_id,
            user_id: user_id.into(),
            role,
        }
    }
}
