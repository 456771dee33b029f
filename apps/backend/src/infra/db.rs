use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, max_connections, DbProfile};
use crate::error::AppError;

/// Open a pool for `profile`. Does NOT run any migrations.
pub async fn connect_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut opt = ConnectOptions::new(url);
    opt.max_connections(max_connections(profile)?)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    if *profile == DbProfile::InMemory {
        // The database lives only as long as its single connection
        opt.min_connections(1);
    }

    let conn = Database::connect(opt)
        .await
        .map_err(|e| AppError::config(format!("failed to connect to database: {e}")))?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(profile: &DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;
    info!(profile = ?profile, "database ready");
    Ok(conn)
}
