use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::projects::{self, NewProject, Project, ProjectPatch};
use crate::repos::Page;
use crate::services::validate;

fn not_found(project_id: i64) -> AppError {
    DomainError::not_found(NotFoundKind::Project, format!("Project {project_id} not found")).into()
}

pub async fn get_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<Project, AppError> {
    projects::find_project(conn, project_id)
        .await?
        .ok_or_else(|| not_found(project_id))
}

pub async fn list_projects<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Project>, AppError> {
    Ok(projects::list_projects(conn, page).await?)
}

pub async fn create_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project: NewProject,
) -> Result<Project, AppError> {
    validate::description(&project.description)?;
    let created = projects::create_project(conn, project).await?;
    info!(project_id = created.id, "project created");
    Ok(created)
}

pub async fn update_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
    patch: ProjectPatch,
) -> Result<(), AppError> {
    validate::non_empty_patch(patch.is_empty())?;
    if let Some(description) = &patch.description {
        validate::description(description)?;
    }

    if !projects::update_project(conn, project_id, patch).await? {
        return Err(not_found(project_id));
    }
    info!(project_id, "project updated");
    Ok(())
}

pub async fn delete_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<(), AppError> {
    if !projects::delete_project(conn, project_id).await? {
        return Err(not_found(project_id));
    }
    info!(project_id, "project deleted");
    Ok(())
}
