use actix_web::web;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod health;
pub mod projects;

/// Register every route.
///
/// `main.rs` wraps the app in the tracing middleware; tests may call this
/// on a bare `App` to exercise handlers directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed JSON bodies answer with problem details like everything else.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }));

    // Health check routes: /health
    cfg.configure(health::configure_routes);

    // Project routes: /api/projects/**
    cfg.service(web::scope("/api/projects").configure(projects::configure_routes));
}
