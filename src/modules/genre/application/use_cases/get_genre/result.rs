use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::genre::domain::{Genre, GenreId};

/// Full read model of a genre; category ids are rendered as strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id(),
            name: genre.name().map(str::to_string),
            is_active: genre.is_active(),
            categories: genre.categories().iter().map(ToString::to_string).collect(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}
