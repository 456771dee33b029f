//! Project repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::projects_sea::{self as projects_adapter, ProjectCreate, ProjectUpdate};
use crate::errors::domain::DomainError;
use crate::repos::tags::{self, Tag};
use crate::repos::Page;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub project_url: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub project_url: String,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.image_url.is_none()
            && self.description.is_none()
            && self.project_url.is_none()
            && self.tags.is_none()
    }
}

pub async fn find_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<Option<Project>, DomainError> {
    projects_adapter::find_by_id(conn, project_id)
        .await?
        .map(Project::try_from)
        .transpose()
}

pub async fn list_projects<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Project>, DomainError> {
    projects_adapter::list(conn, page.skip, page.limit)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect()
}

pub async fn create_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project: NewProject,
) -> Result<Project, DomainError> {
    let dto = ProjectCreate {
        title: project.title,
        image_url: project.image_url,
        description: project.description,
        project_url: project.project_url,
        tags: tags::encode(&project.tags)?,
    };
    Project::try_from(projects_adapter::create_project(conn, dto).await?)
}

pub async fn update_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
    patch: ProjectPatch,
) -> Result<bool, DomainError> {
    let dto = ProjectUpdate {
        title: patch.title,
        image_url: patch.image_url,
        description: patch.description,
        project_url: patch.project_url,
        tags: patch.tags.as_deref().map(tags::encode).transpose()?,
    };
    Ok(projects_adapter::update_project(conn, project_id, dto).await? > 0)
}

pub async fn delete_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<bool, DomainError> {
    Ok(projects_adapter::delete_project(conn, project_id).await? > 0)
}

impl TryFrom<crate::entities::projects::Model> for Project {
    type Error = DomainError;

    fn try_from(model: crate::entities::projects::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            image_url: model.image_url,
            description: model.description,
            project_url: model.project_url,
            tags: tags::decode(model.tags)?,
        })
    }
}
