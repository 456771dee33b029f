//! Article repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::adapters::articles_sea::{self as articles_adapter, ArticleCreate, ArticleUpdate};
use crate::errors::domain::DomainError;
use crate::repos::tags::{self, Tag};
use crate::repos::Page;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub description: String,
    pub content: String,
    pub tags: Vec<Tag>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

/// Body of `POST /articles`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewArticle {
    pub author: String,
    pub tags: Vec<Tag>,
    pub image_url: String,
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Body of `PUT /articles/{id}`; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticlePatch {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl ArticlePatch {
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.tags.is_none()
            && self.image_url.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.content.is_none()
    }
}

pub async fn find_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
) -> Result<Option<Article>, DomainError> {
    articles_adapter::find_by_id(conn, article_id)
        .await?
        .map(Article::try_from)
        .transpose()
}

pub async fn list_articles<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Article>, DomainError> {
    articles_adapter::list(conn, page.skip, page.limit)
        .await?
        .into_iter()
        .map(Article::try_from)
        .collect()
}

pub async fn create_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article: NewArticle,
    now: OffsetDateTime,
) -> Result<Article, DomainError> {
    let dto = ArticleCreate {
        title: article.title,
        author: article.author,
        image_url: article.image_url,
        description: article.description,
        content: article.content,
        tags: tags::encode(&article.tags)?,
        created_at: now,
    };
    Article::try_from(articles_adapter::create_article(conn, dto).await?)
}

/// False when no article has this id.
pub async fn update_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
    patch: ArticlePatch,
    now: OffsetDateTime,
) -> Result<bool, DomainError> {
    let dto = ArticleUpdate {
        title: patch.title,
        author: patch.author,
        image_url: patch.image_url,
        description: patch.description,
        content: patch.content,
        tags: patch.tags.as_deref().map(tags::encode).transpose()?,
        updated_at: now,
    };
    Ok(articles_adapter::update_article(conn, article_id, dto).await? > 0)
}

/// False when no article has this id.
pub async fn delete_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
) -> Result<bool, DomainError> {
    Ok(articles_adapter::delete_article(conn, article_id).await? > 0)
}

impl TryFrom<crate::entities::articles::Model> for Article {
    type Error = DomainError;

    fn try_from(model: crate::entities::articles::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            author: model.author,
            image_url: model.image_url,
            description: model.description,
            content: model.content,
            tags: tags::decode(model.tags)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
