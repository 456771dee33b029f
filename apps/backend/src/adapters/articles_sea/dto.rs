//! DTOs for articles_sea adapter.

use sea_orm::prelude::Json;
use time::OffsetDateTime;

/// DTO for inserting an article. `tags` is the already-encoded JSON list.
#[derive(Debug, Clone)]
pub struct ArticleCreate {
    pub title: String,
    pub author: String,
    pub image_url: String,
    pub description: String,
    pub content: String,
    pub tags: Json,
    pub created_at: OffsetDateTime,
}

/// Column-level patch; `None` leaves the column untouched.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Json>,
    pub updated_at: OffsetDateTime,
}
