use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Borrow the database connection from `AppState`, or fail with
/// `DB_UNAVAILABLE` when the state was built without one.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state.db().ok_or_else(AppError::db_unavailable)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::ResponseError;

    use super::require_db;
    use crate::error::AppError;
    use crate::repos::memberships_memory::InMemoryMembershipStore;
    use crate::state::app_state::AppState;
    use crate::state::security_config::SecurityConfig;

    #[test]
    fn missing_db_is_a_500_db_unavailable() {
        let state = AppState::with_store(
            Arc::new(InMemoryMembershipStore::new()),
            SecurityConfig::default(),
        );

        let err = require_db(&state).unwrap_err();
        assert!(matches!(err, AppError::DbUnavailable));
        assert_eq!(
            err.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
