//! Misbehaving membership stores.

use std::time::Duration;

use async_trait::async_trait;
use envoy_backend::errors::domain::StoreError;
use envoy_backend::repos::memberships::{MembershipStore, ProjectMembership};

/// Every query fails as if the backend were down.
pub struct UnavailableStore;

#[async_trait]
impl MembershipStore for UnavailableStore {
    type ProjectId = i64;
    type UserId = str;

    async fn is_owner(&self, _: &i64, _: &str) -> Result<bool, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }

    async fn find_membership(
        &self,
        _: &i64,
        _: &str,
    ) -> Result<Option<ProjectMembership>, StoreError> {
        Err(StoreError::unavailable("connection refused"))
    }
}

/// Every query hangs far longer than any test deadline.
pub struct HangingStore;

#[async_trait]
impl MembershipStore for HangingStore {
    type ProjectId = i64;
    type UserId = str;

    async fn is_owner(&self, _: &i64, _: &str) -> Result<bool, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(true)
    }

    async fn find_membership(
        &self,
        _: &i64,
        _: &str,
    ) -> Result<Option<ProjectMembership>, StoreError> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Ok(None)
    }
}
