use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::articles::{self, Article, ArticlePatch, NewArticle};
use crate::repos::Page;
use crate::services::validate;

fn not_found(article_id: i64) -> AppError {
    DomainError::not_found(NotFoundKind::Article, format!("Article {article_id} not found")).into()
}

pub async fn get_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
) -> Result<Article, AppError> {
    articles::find_article(conn, article_id)
        .await?
        .ok_or_else(|| not_found(article_id))
}

pub async fn list_articles<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Article>, AppError> {
    Ok(articles::list_articles(conn, page).await?)
}

pub async fn create_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article: NewArticle,
    now: OffsetDateTime,
) -> Result<Article, AppError> {
    validate::description(&article.description)?;
    let created = articles::create_article(conn, article, now).await?;
    info!(article_id = created.id, "article created");
    Ok(created)
}

/// Applies the set fields and stamps `updated_at`.
pub async fn update_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
    patch: ArticlePatch,
    now: OffsetDateTime,
) -> Result<(), AppError> {
    validate::non_empty_patch(patch.is_empty())?;
    if let Some(description) = &patch.description {
        validate::description(description)?;
    }

    if !articles::update_article(conn, article_id, patch, now).await? {
        return Err(not_found(article_id));
    }
    info!(article_id, "article updated");
    Ok(())
}

pub async fn delete_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
) -> Result<(), AppError> {
    if !articles::delete_article(conn, article_id).await? {
        return Err(not_found(article_id));
    }
    info!(article_id, "article deleted");
    Ok(())
}
