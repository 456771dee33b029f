//! Skill repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::skills_sea::{self as skills_adapter, SkillCreate, SkillUpdate};
use crate::errors::domain::DomainError;
use crate::repos::Page;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: i64,
    pub name: String,
    pub experience: i16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub experience: i16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub experience: Option<i16>,
}

impl SkillPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.experience.is_none()
    }
}

pub async fn find_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
) -> Result<Option<Skill>, DomainError> {
    Ok(skills_adapter::find_by_id(conn, skill_id).await?.map(Skill::from))
}

pub async fn list_skills<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    page: Page,
) -> Result<Vec<Skill>, DomainError> {
    let skills = skills_adapter::list(conn, page.skip, page.limit).await?;
    Ok(skills.into_iter().map(Skill::from).collect())
}

pub async fn create_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill: NewSkill,
) -> Result<Skill, DomainError> {
    let dto = SkillCreate {
        name: skill.name,
        experience: skill.experience,
    };
    Ok(Skill::from(skills_adapter::create_skill(conn, dto).await?))
}

pub async fn update_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
    patch: SkillPatch,
) -> Result<bool, DomainError> {
    let dto = SkillUpdate {
        name: patch.name,
        experience: patch.experience,
    };
    Ok(skills_adapter::update_skill(conn, skill_id, dto).await? > 0)
}

pub async fn delete_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
) -> Result<bool, DomainError> {
    Ok(skills_adapter::delete_skill(conn, skill_id).await? > 0)
}

impl From<crate::entities::skills::Model> for Skill {
    fn from(model: crate::entities::skills::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            experience: model.experience,
        }
    }
}
