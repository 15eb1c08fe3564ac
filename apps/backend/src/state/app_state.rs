use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::adapters::memberships_sea::SeaMembershipStore;
use crate::config::env::DEFAULT_STORE_TIMEOUT;
use crate::errors::domain::{AuthError, StoreError};
use crate::repos::memberships::SharedMembershipStore;
use crate::services::access_guard::AccessGuard;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent when running against a non-SQL store)
    pub db: Option<DatabaseConnection>,
    /// Token signing settings
    pub security: SecurityConfig,
    /// Project role enforcement over the configured membership store
    pub access: AccessGuard<SharedMembershipStore>,
    /// Deadline for a single role resolution
    pub store_timeout: Duration,
}

impl AppState {
    /// State backed by the sea-orm membership store on `db`.
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        let store: SharedMembershipStore = Arc::new(SeaMembershipStore::new(db.clone()));
        Self {
            db: Some(db),
            security,
            access: AccessGuard::new(store),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// State over an arbitrary store and no database.
    ///
    /// Member management routes need the database and answer
    /// `DB_UNAVAILABLE` in this mode; authorization still works.
    pub fn with_store(store: SharedMembershipStore, security: SecurityConfig) -> Self {
        Self {
            db: None,
            security,
            access: AccessGuard::new(store),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Run a store-backed authorization step under `store_timeout`.
    /// Running out of time is a store failure, never a denial.
    pub async fn within_store_deadline<T, F>(&self, fut: F) -> Result<T, AuthError>
    where
        F: Future<Output = Result<T, AuthError>>,
    {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.store_timeout.as_millis() as u64,
                    "membership store deadline exceeded"
                );
                Err(StoreError::timeout(self.store_timeout).into())
            }
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("security", &self.security)
            .field("store_timeout", &self.store_timeout)
            .finish_non_exhaustive()
    }
}
