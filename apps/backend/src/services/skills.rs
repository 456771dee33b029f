use sea_orm::ConnectionTrait;
use tracing::info;

use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::skills::{self, NewSkill, Skill, SkillPatch};
use crate::repos::Page;
use crate::services::validate;

fn not_found(skill_id: i64) -> AppError {
    DomainError::not_found(NotFoundKind::Skill, format!("Skill {skill_id} not found")).into()
}

pub async fn get_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
) -> Result<Skill, AppError> {
    skills::find_skill(conn, skill_id)
        .await?
        .ok_or_else(|| not_found(skill_id))
}

pub async fn list_skills<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Skill>, AppError> {
    Ok(skills::list_skills(conn, page).await?)
}

pub async fn create_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill: NewSkill,
) -> Result<Skill, AppError> {
    validate::experience(skill.experience)?;
    let created = skills::create_skill(conn, skill).await?;
    info!(skill_id = created.id, "skill created");
    Ok(created)
}

pub async fn update_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
    patch: SkillPatch,
) -> Result<(), AppError> {
    validate::non_empty_patch(patch.is_empty())?;
    if let Some(experience) = patch.experience {
        validate::experience(experience)?;
    }

    if !skills::update_skill(conn, skill_id, patch).await? {
        return Err(not_found(skill_id));
    }
    info!(skill_id, "skill updated");
    Ok(())
}

pub async fn delete_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
) -> Result<(), AppError> {
    if !skills::delete_skill(conn, skill_id).await? {
        return Err(not_found(skill_id));
    }
    info!(skill_id, "skill deleted");
    Ok(())
}
