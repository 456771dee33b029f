use actix_web::middleware::Compress;
use actix_web::{web, App, HttpServer};
use portfolio_backend::config::db::DbProfile;
use portfolio_backend::config::server::ServerConfig;
use portfolio_backend::infra::state::build_state;
use portfolio_backend::middleware::cors::cors_middleware;
use portfolio_backend::middleware::request_trace::RequestTrace;
use portfolio_backend::middleware::structured_logger::StructuredLogger;
use portfolio_backend::routes;
use portfolio_backend::state::security_config::SecurityConfig;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env is fine; the process environment still applies
    let dotenv = dotenvy::dotenv();
    telemetry::init_tracing();
    if let Err(e) = &dotenv {
        if !e.not_found() {
            error!(error = %e, "failed to load .env");
        }
    }

    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let security = match SecurityConfig::from_env() {
        Ok(security) => security,
        Err(e) => {
            error!(error = %e, "invalid token configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state(security)
        .with_db(DbProfile::Postgres)
        .with_admin(server.admin.clone())
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        api_path = %server.api_path,
        "starting portfolio backend"
    );

    let data = web::Data::new(app_state);
    let api_path = server.api_path.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(|cfg| routes::configure(cfg, &api_path))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
