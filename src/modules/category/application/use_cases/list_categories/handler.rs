use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::category::domain::CategoryRepository;
use crate::shared::application::Query;
use crate::shared::errors::AppResult;

use super::{
    query::ListCategoriesQuery,
    result::{CategoryListOutput, ListCategoriesResult},
};

/// Query handler for paging through categories
pub struct ListCategoriesHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl ListCategoriesHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl Query<ListCategoriesQuery, ListCategoriesResult> for ListCategoriesHandler {
    async fn execute(&self, query: ListCategoriesQuery) -> AppResult<ListCategoriesResult> {
        log_debug!(
            "ListCategories: page={} per_page={} terms={:?}",
            query.page,
            query.per_page,
            query.terms
        );

        let page = self.category_repository.find_all(query).await?;
        Ok(page.map(CategoryListOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::repositories::MockCategoryRepository;
    use crate::modules::category::domain::Category;
    use crate::shared::application::{Pagination, SearchQuery, SortDirection};
    use crate::shared::errors::AppError;

    fn category(name: &str) -> Category {
        Category::new_category(Some(name.into()), None, true)
    }

    #[tokio::test]
    async fn maps_every_item_and_keeps_paging_metadata() {
        let stored = vec![category("Filmes"), category("Séries"), category("Documentários")];
        let ids: Vec<_> = stored.iter().map(Category::id).collect();
        let query = SearchQuery::new(0, 10, "", "createdAt", SortDirection::Asc);

        let mut repository = MockCategoryRepository::new();
        repository
            .expect_find_all()
            .withf(|query| query.sort == "createdAt" && query.per_page == 10)
            .times(1)
            .returning(move |query| {
                Ok(Pagination::new(query.page, query.per_page, 3, stored.clone()))
            });

        let page = ListCategoriesHandler::new(Arc::new(repository))
            .execute(query)
            .await
            .unwrap();

        assert_eq!(page.current_page, 0);
        assert_eq!(page.per_page, 10);
        assert_eq!(page.total, 3);
        assert_eq!(page.items.iter().map(|item| item.id).collect::<Vec<_>>(), ids);
        assert_eq!(page.items[1].name.as_deref(), Some("Séries"));
    }

    #[tokio::test]
    async fn empty_page_is_returned_as_is() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_find_all()
            .returning(|query| Ok(Pagination::new(query.page, query.per_page, 0, Vec::new())));

        let page = ListCategoriesHandler::new(Arc::new(repository))
            .execute(SearchQuery::default())
            .await
            .unwrap();

        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn storage_failure_propagates_unchanged() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_find_all()
            .returning(|_| Err(AppError::InternalError("Gateway error".into())));

        let err = ListCategoriesHandler::new(Arc::new(repository))
            .execute(SearchQuery::default())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Internal error: Gateway error");
    }
}
