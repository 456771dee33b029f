//! SeaORM adapter for article repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::adapters::set_if;
use crate::entities::articles;

pub mod dto;

pub use dto::{ArticleCreate, ArticleUpdate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
) -> Result<Option<articles::Model>, sea_orm::DbErr> {
    articles::Entity::find_by_id(article_id).one(conn).await
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    skip: u64,
    limit: u64,
) -> Result<Vec<articles::Model>, sea_orm::DbErr> {
    articles::Entity::find()
        .order_by_asc(articles::Column::Id)
        .offset(skip)
        .limit(limit)
        .all(conn)
        .await
}

pub async fn create_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ArticleCreate,
) -> Result<articles::Model, sea_orm::DbErr> {
    let article_active = articles::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        author: Set(dto.author),
        image_url: Set(dto.image_url),
        description: Set(dto.description),
        content: Set(dto.content),
        tags: Set(dto.tags),
        created_at: Set(dto.created_at),
        updated_at: Set(None),
    };

    article_active.insert(conn).await
}

/// Applies the patch and returns the number of rows touched.
pub async fn update_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
    dto: ArticleUpdate,
) -> Result<u64, sea_orm::DbErr> {
    let patch = articles::ActiveModel {
        id: NotSet,
        title: set_if(dto.title),
        author: set_if(dto.author),
        image_url: set_if(dto.image_url),
        description: set_if(dto.description),
        content: set_if(dto.content),
        tags: set_if(dto.tags),
        created_at: NotSet,
        updated_at: Set(Some(dto.updated_at)),
    };

    let result = articles::Entity::update_many()
        .set(patch)
        .filter(articles::Column::Id.eq(article_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn delete_article<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    article_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = articles::Entity::delete_by_id(article_id).exec(conn).await?;
    Ok(result.rows_affected)
}
