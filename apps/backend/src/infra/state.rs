use crate::config::db::DbProfile;
use crate::config::server::AdminSeed;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::users::seed_admin;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    admin: Option<AdminSeed>,
}

impl StateBuilder {
    pub fn new(security_config: SecurityConfig) -> Self {
        Self {
            security_config,
            db_profile: None,
            admin: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Ensure this user exists once the schema is migrated.
    pub fn with_admin(mut self, admin: Option<AdminSeed>) -> Self {
        self.admin = admin;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let Some(profile) = self.db_profile else {
            return Ok(AppState::new_without_db(self.security_config));
        };

        // single entrypoint: connect + migrate + seed
        let conn = bootstrap_db(&profile).await?;
        if let Some(admin) = &self.admin {
            seed_admin(&conn, admin).await?;
        }
        Ok(AppState::new(conn, self.security_config))
    }
}

pub fn build_state(security_config: SecurityConfig) -> StateBuilder {
    StateBuilder::new(security_config)
}
