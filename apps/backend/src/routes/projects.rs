use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::projects::{NewProject, ProjectPatch};
use crate::repos::Page;
use crate::services::projects;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct ProjectStatus {
    project_id: i64,
    status: &'static str,
}

async fn get_project(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let project = projects::get_project(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(project))
}

async fn list_projects(
    page: web::Query<Page>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let list = projects::list_projects(db, page.into_inner()).await?;
    Ok(HttpResponse::Ok().json(list))
}

async fn create_project(
    body: ValidatedJson<NewProject>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let project = body.into_inner();

    let created = with_txn(db, move |txn| {
        Box::pin(async move { projects::create_project(txn, project).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(created))
}

async fn update_project(
    path: web::Path<i64>,
    body: ValidatedJson<ProjectPatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let project_id = path.into_inner();
    let patch = body.into_inner();

    with_txn(db, move |txn| {
        Box::pin(async move { projects::update_project(txn, project_id, patch).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(ProjectStatus {
        project_id,
        status: "Project updated",
    }))
}

async fn delete_project(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let project_id = path.into_inner();

    with_txn(db, move |txn| {
        Box::pin(async move { projects::delete_project(txn, project_id).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(ProjectStatus {
        project_id,
        status: "Project deleted",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(list_projects))
            .route(web::post().to(create_project)),
    )
    .service(
        web::resource("/{project_id}")
            .route(web::get().to(get_project))
            .route(web::put().to(update_project))
            .route(web::delete().to(delete_project)),
    );
}
