use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::skills::{NewSkill, SkillPatch};
use crate::repos::Page;
use crate::services::skills;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct SkillStatus {
    skill_id: i64,
    status: &'static str,
}

async fn get_skill(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let skill = skills::get_skill(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(skill))
}

async fn list_skills(
    page: web::Query<Page>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let list = skills::list_skills(db, page.into_inner()).await?;
    Ok(HttpResponse::Ok().json(list))
}

async fn create_skill(
    body: ValidatedJson<NewSkill>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let skill = body.into_inner();

    let created = with_txn(db, move |txn| {
        Box::pin(async move { skills::create_skill(txn, skill).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(created))
}

async fn update_skill(
    path: web::Path<i64>,
    body: ValidatedJson<SkillPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let skill_id = path.into_inner();
    let patch = body.into_inner();

    with_txn(db, move |txn| {
        Box::pin(async move { skills::update_skill(txn, skill_id, patch).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(SkillStatus {
        skill_id,
        status: "Skill updated",
    }))
}

async fn delete_skill(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let skill_id = path.into_inner();

    with_txn(db, move |txn| {
        Box::pin(async move { skills::delete_skill(txn, skill_id).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(SkillStatus {
        skill_id,
        status: "Skill deleted",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(list_skills))
            .route(web::post().to(create_skill)),
    )
    .service(
        web::resource("/{skill_id}")
            .route(web::get().to(get_skill))
            .route(web::put().to(update_skill))
            .route(web::delete().to(delete_skill)),
    );
}
