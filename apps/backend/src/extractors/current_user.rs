use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::Serialize;

use super::auth_token::AuthToken;
use crate::auth::claims::Claims;
use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Authenticated caller, taken from a validated bearer token.
///
/// No store lookup happens here; the token alone establishes identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub user_id: String,
    pub email: String,
    /// Token expiry (seconds since epoch)
    pub exp: i64,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.user_id,
            email: claims.email,
            exp: claims.exp,
        }
    }
}

impl CurrentUser {
    /// Validate the request's bearer token once and memoize the result in
    /// request extensions.
    pub fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        if let Some(user) = req.extensions().get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let token = AuthToken::from_req(req)?;
        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        let claims = validate_token(&token.token, &state.security).map_err(|e| {
            security::token_rejected(&e.to_string(), &token.token);
            AppError::from(e)
        })?;

        let user = CurrentUser::from(claims);
        req.extensions_mut().insert(user.clone());
        Ok(user)
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
