//! SeaORM adapters. Functions here return `DbErr`; repos map it to `DomainError`.

pub mod articles_sea;
pub mod projects_sea;
pub mod skills_sea;
pub mod users_sea;

use sea_orm::{ActiveValue, NotSet, Set};

/// Patch field to active value: `None` leaves the column untouched.
pub(crate) fn set_if<V>(value: Option<V>) -> ActiveValue<V>
where
    V: Into<sea_orm::Value>,
{
    match value {
        Some(v) => Set(v),
        None => NotSet,
    }
}
