use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::articles::{ArticlePatch, NewArticle};
use crate::repos::Page;
use crate::services::articles;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct ArticleStatus {
    article_id: i64,
    status: &'static str,
}

async fn get_article(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let article = articles::get_article(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(article))
}

async fn list_articles(
    page: web::Query<Page>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let list = articles::list_articles(db, page.into_inner()).await?;
    Ok(HttpResponse::Ok().json(list))
}

async fn create_article(
    body: ValidatedJson<NewArticle>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let article = body.into_inner();
    let now = OffsetDateTime::now_utc();

    let created = with_txn(db, move |txn| {
        Box::pin(async move { articles::create_article(txn, article, now).await })
    })
    .await?;
    Ok(HttpResponse::Created().json(created))
}

async fn update_article(
    path: web::Path<i64>,
    body: ValidatedJson<ArticlePatch>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let article_id = path.into_inner();
    let patch = body.into_inner();
    let now = OffsetDateTime::now_utc();

    with_txn(db, move |txn| {
        Box::pin(async move { articles::update_article(txn, article_id, patch, now).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(ArticleStatus {
        article_id,
        status: "Article updated",
    }))
}

async fn delete_article(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let article_id = path.into_inner();

    with_txn(db, move |txn| {
        Box::pin(async move { articles::delete_article(txn, article_id).await })
    })
    .await?;
    Ok(HttpResponse::Ok().json(ArticleStatus {
        article_id,
        status: "Article deleted",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(["", "/"])
            .route(web::get().to(list_articles))
            .route(web::post().to(create_article)),
    )
    .service(
        web::resource("/{article_id}")
            .route(web::get().to(get_article))
            .route(web::put().to(update_article))
            .route(web::delete().to(delete_article)),
    );
}
