use actix_web::{web, App, HttpServer};
use envoy_backend::config::AppConfig;
use envoy_backend::infra::db::connect_db;
use envoy_backend::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use envoy_backend::routes;
use envoy_backend::state::AppState;
use migration::{migrate, MigrationCommand};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.detail());
            std::process::exit(1);
        }
    };

    let db = match connect_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, MigrationCommand::Up).await {
        eprintln!("❌ Failed to run migrations: {e}");
        std::process::exit(1);
    }

    let app_state =
        AppState::new(db, config.security.clone()).with_store_timeout(config.store_timeout);
    let data = web::Data::new(app_state);

    tracing::info!(host = %config.host, port = config.port, "starting envoy backend");

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
