//! Read-only membership store seam consumed by the access resolver.

use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::entities::project_users::{self, MemberRole};
use crate::errors::domain::StoreError;

/// Explicit project membership as seen by the resolver
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMembership {
    pub role: MemberRole,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Query interface to whatever records project ownership and membership.
///
/// Id types are chosen by the implementation; the resolver is generic over
/// them.
#[async_trait]
pub trait MembershipStore: Send + Sync {
    type ProjectId: ?Sized + Sync;
    type UserId: ?Sized + Sync;

    /// Whether `user_id` is the recorded creator/owner of `project_id`.
    async fn is_owner(
        &self,
        project_id: &Self::ProjectId,
        user_id: &Self::UserId,
    ) -> Result<bool, StoreError>;

    /// The explicit membership row for the pair, if any.
    async fn find_membership(
        &self,
        project_id: &Self::ProjectId,
        user_id: &Self::UserId,
    ) -> Result<Option<ProjectMembership>, StoreError>;
}

#[async_trait]
impl<S> MembershipStore for Arc<S>
where
    S: MembershipStore + ?Sized,
{
    type ProjectId = S::ProjectId;
    type UserId = S::UserId;

    async fn is_owner(
        &self,
        project_id: &Self::ProjectId,
        user_id: &Self::UserId,
    ) -> Result<bool, StoreError> {
        (**self).is_owner(project_id, user_id).await
    }

    async fn find_membership(
        &self,
        project_id: &Self::ProjectId,
        user_id: &Self::UserId,
    ) -> Result<Option<ProjectMembership>, StoreError> {
        (**self).find_membership(project_id, user_id).await
    }
}

/// Store shape used by the HTTP layer: numeric project ids, opaque user ids.
pub type SharedMembershipStore = Arc<dyn MembershipStore<ProjectId = i64, UserId = str>>;

impl From<project_users::Model> for ProjectMembership {
    fn from(model: project_users::Model) -> Self {
        Self {
            role: model.role,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
