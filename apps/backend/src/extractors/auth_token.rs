use actix_web::{dev::Payload, http::header, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;

/// Raw bearer token taken from `Authorization: Bearer <token>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// Pull the bearer token out of `req`.
    ///
    /// A missing header, a non-`Bearer` scheme or an empty token all fail
    /// with `UNAUTHORIZED_MISSING_BEARER`.
    pub fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let value = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or_else(AppError::unauthorized_missing_bearer)?
            .to_str()
            .map_err(|_| AppError::unauthorized_missing_bearer())?;

        let token = value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty() && !t.contains(char::is_whitespace))
            .ok_or_else(AppError::unauthorized_missing_bearer)?;

        Ok(AuthToken {
            token: token.to_string(),
        })
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
