use serde::Serialize;

use crate::modules::category::domain::{Category, CategoryId};

/// Identity of the category that was stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

impl From<&Category> for CreateCategoryOutput {
    fn from(category: &Category) -> Self {
        Self { id: category.id() }
    }
}
