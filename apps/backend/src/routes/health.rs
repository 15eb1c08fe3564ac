use actix_web::{web, HttpResponse};
use migration::count_applied_migrations;
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    migrations: Option<usize>,
    time: String,
}

/// Liveness plus a cheap database probe. Always 200; the `db` field
/// carries the probe result.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, migrations) = match app_state.db() {
        None => ("not_configured", None),
        Some(conn) => {
            let probe = conn
                .query_one(Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1 AS health_check".to_string(),
                ))
                .await;
            match probe {
                Ok(_) => ("ok", count_applied_migrations(conn).await.ok()),
                Err(e) => {
                    tracing::warn!(error = %e, "health probe failed");
                    ("error", None)
                }
            }
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
