use async_trait::async_trait;
use std::{cmp::Ordering, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::log_debug;
use crate::modules::category::domain::{Category, CategoryId, CategoryRepository};
use crate::modules::category::infrastructure::sort::CategorySort;
use crate::shared::application::{Pagination, SearchQuery, SortDirection};
use crate::shared::errors::AppResult;

/// Process-local category storage with the same search rules as Postgres
#[derive(Clone, Default)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<HashMap<CategoryId, Category>>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.categories.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.categories.read().await.is_empty()
    }

    async fn store(&self, category: Category) -> Category {
        let mut categories = self.categories.write().await;
        categories.insert(category.id(), category.clone());
        category
    }
}

fn matches(category: &Category, terms: &str) -> bool {
    let contains = |field: Option<&str>| {
        field
            .map(|value| value.to_lowercase().contains(terms))
            .unwrap_or(false)
    };
    contains(category.name()) || contains(category.description())
}

// Postgres ordering: NULL sorts after every value when ascending
fn nulls_last(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare(a: &Category, b: &Category, sort: CategorySort) -> Ordering {
    let primary = match sort {
        CategorySort::Name => nulls_last(a.name(), b.name()),
        CategorySort::Description => nulls_last(a.description(), b.description()),
        CategorySort::CreatedAt => a.created_at().cmp(&b.created_at()),
        CategorySort::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        CategorySort::IsActive => a.is_active().cmp(&b.is_active()),
    };
    primary.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, category: Category) -> AppResult<Category> {
        Ok(self.store(category).await)
    }

    async fn update(&self, category: Category) -> AppResult<Category> {
        Ok(self.store(category).await)
    }

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        Ok(self.categories.read().await.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: CategoryId) -> AppResult<()> {
        if self.categories.write().await.remove(&id).is_none() {
            log_debug!("Category {} was not stored, nothing to delete", id);
        }
        Ok(())
    }

    async fn find_all(&self, query: SearchQuery) -> AppResult<Pagination<Category>> {
        let terms = query.terms().map(str::to_lowercase);
        let sort = CategorySort::from_field(&query.sort);

        let mut found: Vec<Category> = {
            let categories = self.categories.read().await;
            categories
                .values()
                .filter(|category| terms.as_deref().map_or(true, |t| matches(category, t)))
                .cloned()
                .collect()
        };

        found.sort_by(|a, b| match query.direction {
            SortDirection::Asc => compare(a, b, sort),
            SortDirection::Desc => compare(b, a, sort),
        });

        let total = found.len() as u64;
        let items = found
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.limit() as usize)
            .collect();

        Ok(Pagination::new(query.page, query.per_page, total, items))
    }
}
