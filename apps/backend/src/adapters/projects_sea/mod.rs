//! SeaORM adapter for project repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::adapters::set_if;
use crate::entities::projects;

pub mod dto;

pub use dto::{ProjectCreate, ProjectUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<Option<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find_by_id(project_id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<projects::Model>, sea_orm::DbErr> {
    projects::Entity::find()
        .order_by_asc(projects::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProjectCreate,
) -> Result<projects::Model, sea_orm::DbErr> {
    projects::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        image_url: Set(dto.image_url),
        description: Set(dto.description),
        project_url: Set(dto.project_url),
        tags: Set(dto.tags),
    }
    .insert(conn)
    .await
}

pub async fn update_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
    dto: ProjectUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let patch = projects::ActiveModel {
        id: NotSet,
        title: set_if(dto.title),
        image_url: set_if(dto.image_url),
        description: set_if(dto.description),
        project_url: set_if(dto.project_url),
        tags: set_if(dto.tags),
    };

    let result = projects::Entity::update_many()
        .set(patch)
        .filter(projects::Column::Id.eq(project_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_project<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    project_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = projects::Entity::delete_by_id(project_id).exec(conn).await?;
    Ok(result.rows_affected)
}
