use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::category::domain::{Category, CategoryId};
use crate::schema::categories;

// For reading from and inserting into the database
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CategoryModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

// For updating existing categories (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(treat_none_as_null = true)]
pub struct CategoryChangeset {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category::with(
            CategoryId::from_uuid(model.id),
            Some(model.name),
            model.description,
            model.is_active,
            model.created_at,
            model.updated_at,
            model.deleted_at,
        )
    }
}

// Only validated snapshots reach storage, so a missing name never gets here.
impl From<&Category> for CategoryModel {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id().into(),
            name: category.name().unwrap_or_default().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

impl From<&CategoryModel> for CategoryChangeset {
    fn from(model: &CategoryModel) -> Self {
        Self {
            name: model.name.clone(),
            description: model.description.clone(),
            is_active: model.is_active,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
