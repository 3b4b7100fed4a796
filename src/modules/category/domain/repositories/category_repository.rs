use async_trait::async_trait;

use crate::modules::category::domain::entities::{Category, CategoryId};
use crate::shared::application::{Pagination, SearchQuery};
use crate::shared::errors::AppResult;

/// Storage port for the category aggregate
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category and return the stored snapshot
    async fn create(&self, category: Category) -> AppResult<Category>;

    /// Persist a modified category and return the stored snapshot
    async fn update(&self, category: Category) -> AppResult<Category>;

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>>;

    /// Remove a category; unknown ids are ignored
    async fn delete_by_id(&self, id: CategoryId) -> AppResult<()>;

    /// Page through categories matching the query terms on name or description
    async fn find_all(&self, query: SearchQuery) -> AppResult<Pagination<Category>>;
}
