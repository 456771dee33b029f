use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::warn;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    migrations: String,
    time: String,
}

/// `(db, migrations)`; failures are logged, not returned to the caller.
async fn probe_db(db: &DatabaseConnection) -> (&'static str, String) {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    if let Err(e) = db.query_one(ping).await {
        warn!(error = %e, "health check query failed");
        return ("error", "unknown".to_string());
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(e) => {
            warn!(error = %e, "health check could not read migrations");
            "unknown".to_string()
        }
    };
    ("ok", migrations)
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (db, migrations) = match require_db(&app_state) {
        Ok(conn) => probe_db(conn).await,
        Err(_) => ("unavailable", "unknown".to_string()),
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

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
