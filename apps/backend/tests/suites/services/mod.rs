mod admin_seed;
mod user_accounts;

use portfolio_backend::config::db::DbProfile;
use portfolio_backend::infra::state::build_state;
use portfolio_backend::{AppError, AppState};

use crate::common::test_security;

pub async fn state_with_db() -> Result<AppState, AppError> {
    build_state(test_security())
        .with_db(DbProfile::InMemory)
        .build()
        .await
}
