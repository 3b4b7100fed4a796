use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::application::Pagination;

/// Row of a genre listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreListOutput {
    pub id: GenreId,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreListOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id(),
            name: genre.name().map(str::to_string),
            is_active: genre.is_active(),
            categories: genre.categories().iter().map(ToString::to_string).collect(),
            created_at: genre.created_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

pub type ListGenresResult = Pagination<GenreListOutput>;
