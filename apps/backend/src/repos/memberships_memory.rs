//! In-process membership store for local wiring and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::entities::project_users::MemberRole;
use crate::errors::domain::StoreError;
use crate::repos::memberships::{MembershipStore, ProjectMembership};

#[derive(Debug, Default)]
pub struct InMemoryMembershipStore {
    /// project id -> owner user id
    owners: RwLock<HashMap<i64, String>>,
    members: RwLock<HashMap<(i64, String), ProjectMembership>>,
}

impl InMemoryMembershipStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `owner_id` as the creator of `project_id`, replacing any
    /// previous owner.
    pub fn insert_project(&self, project_id: i64, owner_id: &str) {
        self.owners.write().insert(project_id, owner_id.to_string());
    }

    /// Insert or replace the explicit membership for the pair.
    pub fn add_member(&self, project_id: i64, user_id: &str, role: MemberRole) -> ProjectMembership {
        let now = OffsetDateTime::now_utc();
        let membership = ProjectMembership {
            role,
            created_at: now,
            updated_at: now,
        };
        self.members
            .write()
            .insert((project_id, user_id.to_string()), membership.clone());
        membership
    }

    /// Change the role of an existing member. Returns `None` if there is no
    /// such membership.
    pub fn update_role(
        &self,
        project_id: i64,
        user_id: &str,
        role: MemberRole,
    ) -> Option<ProjectMembership> {
        let mut members = self.members.write();
        let membership = members.get_mut(&(project_id, user_id.to_string()))?;
        membership.role = role;
        membership.updated_at = OffsetDateTime::now_utc();
        Some(membership.clone())
    }

    /// Returns whether a membership was removed.
    pub fn remove_member(&self, project_id: i64, user_id: &str) -> bool {
        self.members
            .write()
            .remove(&(project_id, user_id.to_string()))
            .is_some()
    }
}

#[async_trait]
impl MembershipStore for InMemoryMembershipStore {
    type ProjectId = i64;
    type UserId = str;

    async fn is_owner(&self, project_id: &i64, user_id: &str) -> Result<bool, StoreError> {
        Ok(self
            .owners
            .read()
            .get(project_id)
            .is_some_and(|owner| owner == user_id))
    }

    async fn find_membership(
        &self,
        project_id: &i64,
        user_id: &str,
    ) -> Result<Option<ProjectMembership>, StoreError> {
        Ok(self
            .members
            .read()
            .get(&(*project_id, user_id.to_string()))
            .cloned())
    }
}
