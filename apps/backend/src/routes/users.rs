use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{AuthToken, ValidatedJson};
use crate::logging::pii::Redacted;
use crate::services::users;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UserRef {
    pub email: String,
}

#[derive(Debug, Serialize)]
struct UserStatus {
    email: String,
    status: &'static str,
}

/// Who is managing accounts; "unknown" if the token lapsed mid-request.
fn actor(auth: &AuthToken, app_state: &AppState) -> String {
    auth.subject(SystemTime::now(), &app_state.security)
        .unwrap_or_else(|_| "unknown".to_string())
}

async fn create_user(
    auth: AuthToken,
    body: ValidatedJson<CreateUser>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let CreateUser { email, password } = body.into_inner();
    info!(actor = %Redacted(&actor(&auth, &app_state)), "creating user");

    let new_user = users::NewUser::prepare(email, &password)?;
    let user = with_txn(db, move |txn| {
        Box::pin(async move { users::create_user(txn, &new_user).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(UserStatus {
        email: user.email,
        status: "User successfully created",
    }))
}

async fn delete_user(
    auth: AuthToken,
    body: ValidatedJson<UserRef>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let email = body.into_inner().email;
    info!(actor = %Redacted(&actor(&auth, &app_state)), "deleting user");

    let deleted = email.clone();
    with_txn(db, move |txn| {
        Box::pin(async move { users::delete_user(txn, &deleted).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(UserStatus {
        email,
        status: "User deleted",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::post().to(create_user))
            .route(web::delete().to(delete_user)),
    );
}
