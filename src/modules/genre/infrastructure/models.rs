use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::{Genre, GenreId};
use crate::schema::{genres, genres_categories};

// ============= GENRE MODELS =============

#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenreModel {
    pub id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// For updating existing genres (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = genres)]
#[diesel(treat_none_as_null = true)]
pub struct GenreChangeset {
    pub name: String,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// ============= GENRE-CATEGORY LINK =============

#[derive(Queryable, Selectable, Insertable, Debug, Clone, PartialEq, Eq)]
#[diesel(table_name = genres_categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenreCategoryModel {
    pub genre_id: Uuid,
    pub category_id: Uuid,
    pub position: i32,
}

impl GenreModel {
    /// Rebuild the aggregate from its row and its links, already in position order
    pub fn into_genre(self, categories: Vec<CategoryId>) -> Genre {
        Genre::with(
            GenreId::from_uuid(self.id),
            Some(self.name),
            self.is_active,
            categories,
            self.created_at,
            self.updated_at,
            self.deleted_at,
        )
    }
}

impl From<&Genre> for GenreModel {
    fn from(genre: &Genre) -> Self {
        Self {
            id: genre.id().into(),
            name: genre.name().unwrap_or_default().to_string(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            updated_at: genre.updated_at(),
            deleted_at: genre.deleted_at(),
        }
    }
}

impl From<&GenreModel> for GenreChangeset {
    fn from(model: &GenreModel) -> Self {
        Self {
            name: model.name.clone(),
            is_active: model.is_active,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}

/// Link rows for a genre, numbered in category order
pub fn links_for(genre: &Genre) -> Vec<GenreCategoryModel> {
    let genre_id: Uuid = genre.id().into();
    genre
        .categories()
        .iter()
        .zip(0..)
        .map(|(category, position)| GenreCategoryModel {
            genre_id,
            category_id: (*category).into(),
            position,
        })
        .collect()
}
