use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::category::domain::{Category, CategoryId};
use crate::shared::application::Pagination;

/// Row of a category listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryListOutput {
    pub id: CategoryId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryListOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().map(str::to_string),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
        }
    }
}

pub type ListCategoriesResult = Pagination<CategoryListOutput>;
