use serde::Serialize;

use crate::modules::category::domain::{Category, CategoryId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for UpdateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self { id: category.id() }
    }
}
