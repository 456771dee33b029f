//! SeaORM adapter for skill repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::adapters::set_if;
use crate::entities::skills;

pub mod dto;

pub use dto::{SkillCreate, SkillUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
) -> Result<Option<skills::Model>, sea_orm::DbErr> {
    skills::Entity::find_by_id(skill_id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<skills::Model>, sea_orm::DbErr> {
    skills::Entity::find()
        .order_by_asc(skills::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: SkillCreate,
) -> Result<skills::Model, sea_orm::DbErr> {
    skills::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        experience: Set(dto.experience),
    }
    .insert(conn)
    .await
}

pub async fn update_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
    dto: SkillUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let patch = skills::ActiveModel {
        id: NotSet,
        name: set_if(dto.name),
        experience: set_if(dto.experience),
    };

    let result = skills::Entity::update_many()
        .set(patch)
        .filter(skills::Column::Id.eq(skill_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_skill<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skill_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = skills::Entity::delete_by_id(skill_id).exec(conn).await?;
    Ok(result.rows_affected)
}
