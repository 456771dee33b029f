use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::services::auth;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let LoginRequest { email, password } = body.into_inner();

    let pair = auth::login(&email, &password, db, SystemTime::now(), &app_state.security).await?;
    Ok(HttpResponse::Ok().json(pair))
}

async fn refresh(
    body: ValidatedJson<RefreshRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let pair = auth::refresh(&body.refresh_token, SystemTime::now(), &app_state.security)?;
    Ok(HttpResponse::Ok().json(pair))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::post().to(login)))
        .service(web::resource("/refresh").route(web::post().to(refresh)));
}
