//! Effective project role resolution.

use crate::domain::roles::ProjectRole;
use crate::errors::domain::AuthError;
use crate::repos::memberships::MembershipStore;

/// Turns (project, user) into an effective role by asking a
/// [`MembershipStore`]. Holds no state beyond the store handle.
#[derive(Debug, Clone)]
pub struct AccessResolver<S> {
    store: S,
}

impl<S: MembershipStore> AccessResolver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the caller's role on a project.
    ///
    /// Ownership is checked first and short-circuits; an explicit membership
    /// row for the owner is never consulted. Store failures are returned as
    /// `AuthError::Store`, never as a denial.
    pub async fn get_role(
        &self,
        project_id: &S::ProjectId,
        user_id: &S::UserId,
    ) -> Result<ProjectRole, AuthError> {
        if self.store.is_owner(project_id, user_id).await? {
            return Ok(ProjectRole::Owner);
        }

        match self.store.find_membership(project_id, user_id).await? {
            Some(membership) => Ok(membership.role.into()),
            None => Err(AuthError::NotMember),
        }
    }
}
