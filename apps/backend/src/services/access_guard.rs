//! Role enforcement on top of [`AccessResolver`].

use crate::domain::roles::ProjectRole;
use crate::errors::domain::AuthError;
use crate::repos::memberships::MembershipStore;
use crate::services::access_resolver::AccessResolver;

/// Enforces a minimum project role. Every call re-derives the role from the
/// store; nothing is cached.
#[derive(Debug, Clone)]
pub struct AccessGuard<S> {
    resolver: AccessResolver<S>,
}

impl<S: MembershipStore> AccessGuard<S> {
    pub fn new(store: S) -> Self {
        Self {
            resolver: AccessResolver::new(store),
        }
    }

    pub fn resolver(&self) -> &AccessResolver<S> {
        &self.resolver
    }

    /// Resolve the caller's role; see [`AccessResolver::get_role`].
    pub async fn get_role(
        &self,
        project_id: &S::ProjectId,
        user_id: &S::UserId,
    ) -> Result<ProjectRole, AuthError> {
        self.resolver.get_role(project_id, user_id).await
    }

    /// Pass if the caller's effective role is at least `minimum`, returning
    /// that role.
    ///
    /// An insufficient role and a missing relationship both fail with
    /// `AccessDenied`. Store failures pass through unchanged.
    pub async fn require(
        &self,
        project_id: &S::ProjectId,
        user_id: &S::UserId,
        minimum: ProjectRole,
    ) -> Result<ProjectRole, AuthError> {
        // Only the ownership record can satisfy an owner requirement.
        if minimum == ProjectRole::Owner {
            return if self.resolver.store().is_owner(project_id, user_id).await? {
                Ok(ProjectRole::Owner)
            } else {
                Err(AuthError::AccessDenied)
            };
        }

        match self.resolver.get_role(project_id, user_id).await {
            Ok(role) if role.satisfies(minimum) => Ok(role),
            Ok(_) | Err(AuthError::NotMember) => Err(AuthError::AccessDenied),
            Err(e) => Err(e),
        }
    }

    pub async fn require_owner(
        &self,
        project_id: &S::ProjectId,
        user_id: &S::UserId,
    ) -> Result<(), AuthError> {
        self.require(project_id, user_id, ProjectRole::Owner)
            .await
            .map(|_| ())
    }

    pub async fn require_editor(
        &self,
        project_id: &S::ProjectId,
        user_id: &S::UserId,
    ) -> Result<(), AuthError> {
        self.require(project_id, user_id, ProjectRole::Editor)
            .await
            .map(|_| ())
    }

    pub async fn require_viewer(
        &self,
        project_id: &S::ProjectId,
        user_id: &S::UserId,
    ) -> Result<(), AuthError> {
        self.require(project_id, user_id, ProjectRole::Viewer)
            .await
            .map(|_| ())
    }
}
