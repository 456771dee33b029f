//! Tag lists are stored as a JSON array column on articles and projects.

use sea_orm::prelude::Json;
use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, InfraErrorKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub icon_name: String,
    pub name: String,
}

pub fn encode(tags: &[Tag]) -> Result<Json, DomainError> {
    serde_json::to_value(tags).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("TagEncode".into()),
            format!("failed to encode tags: {e}"),
        )
    })
}

/// A column that does not hold a tag list is corrupt, not empty.
pub fn decode(value: Json) -> Result<Vec<Tag>, DomainError> {
    serde_json::from_value(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("stored tags are not a tag list: {e}"),
        )
    })
}
