use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::category::domain::{Category, CategoryId, CategoryRepository};
use crate::shared::application::Query;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::{AppError, AppResult};

use super::{query::GetCategoryQuery, result::CategoryOutput};

/// Query handler for loading one category
pub struct GetCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl Query<GetCategoryQuery, CategoryOutput> for GetCategoryHandler {
    async fn execute(&self, query: GetCategoryQuery) -> AppResult<CategoryOutput> {
        log_debug!("GetCategory: id={}", query.id);

        let not_found = || AppError::not_found(Category::NAME, query.id.as_str());

        let id: CategoryId = query.id.parse().map_err(|_| not_found())?;
        self.category_repository
            .find_by_id(id)
            .await?
            .map(CategoryOutput::from)
            .ok_or_else(not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::repositories::MockCategoryRepository;

    #[tokio::test]
    async fn returns_every_field_of_the_stored_category() {
        let stored = Category::new_category(Some("Filmes".into()), Some("Todos".into()), false);
        let expected = stored.clone();

        let mut repository = MockCategoryRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let output = GetCategoryHandler::new(Arc::new(repository))
            .execute(GetCategoryQuery::new(expected.id().to_string()))
            .await
            .unwrap();

        assert_eq!(output.id, expected.id());
        assert_eq!(output.name.as_deref(), Some("Filmes"));
        assert_eq!(output.description.as_deref(), Some("Todos"));
        assert!(!output.is_active);
        assert_eq!(output.created_at, expected.created_at());
        assert_eq!(output.updated_at, expected.updated_at());
        assert_eq!(output.deleted_at, expected.deleted_at());
    }

    #[tokio::test]
    async fn missing_category_is_not_found() {
        let id = CategoryId::unique();
        let mut repository = MockCategoryRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let err = GetCategoryHandler::new(Arc::new(repository))
            .execute(GetCategoryQuery::new(id.to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("Category with id {} not found", id));
    }

    #[tokio::test]
    async fn storage_failure_propagates_unchanged() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Err(AppError::InternalError("Gateway error".into())));

        let err = GetCategoryHandler::new(Arc::new(repository))
            .execute(GetCategoryQuery::new(CategoryId::unique().to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Internal error: Gateway error");
    }
}
