//! DTOs for projects_sea adapter.

use sea_orm::prelude::Json;

#[derive(Debug, Clone)]
pub struct ProjectCreate {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub project_url: String,
    pub tags: Json,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub project_url: Option<String>,
    pub tags: Option<Json>,
}
