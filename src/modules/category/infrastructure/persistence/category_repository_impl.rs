use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use tokio::task;

use crate::log_debug;
use crate::modules::category::domain::{Category, CategoryId, CategoryRepository};
use crate::modules::category::infrastructure::models::{CategoryChangeset, CategoryModel};
use crate::modules::category::infrastructure::sort::CategorySort;
use crate::schema::categories;
use crate::shared::application::{Pagination, SearchQuery, SortDirection};
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::shared::Database;

/// Postgres-backed category storage
pub struct CategoryRepositoryImpl {
    db: Arc<Database>,
}

impl CategoryRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: name or description contains the terms, ignoring case
    fn filtered(terms: Option<&str>) -> categories::BoxedQuery<'static, Pg> {
        let mut query = categories::table.into_boxed();

        if let Some(terms) = terms {
            let pattern = format!("%{}%", terms.to_lowercase());
            query = query.filter(
                categories::name
                    .ilike(pattern.clone())
                    .or(categories::description.ilike(pattern)),
            );
        }

        query
    }

    // Helper: apply the requested ordering, id breaks ties
    fn ordered(
        query: categories::BoxedQuery<'static, Pg>,
        sort: CategorySort,
        direction: SortDirection,
    ) -> categories::BoxedQuery<'static, Pg> {
        let query = match (sort, direction) {
            (CategorySort::Name, SortDirection::Asc) => query.order(categories::name.asc()),
            (CategorySort::Name, SortDirection::Desc) => query.order(categories::name.desc()),
            (CategorySort::Description, SortDirection::Asc) => {
                query.order(categories::description.asc())
            }
            (CategorySort::Description, SortDirection::Desc) => {
                query.order(categories::description.desc())
            }
            (CategorySort::CreatedAt, SortDirection::Asc) => {
                query.order(categories::created_at.asc())
            }
            (CategorySort::CreatedAt, SortDirection::Desc) => {
                query.order(categories::created_at.desc())
            }
            (CategorySort::UpdatedAt, SortDirection::Asc) => {
                query.order(categories::updated_at.asc())
            }
            (CategorySort::UpdatedAt, SortDirection::Desc) => {
                query.order(categories::updated_at.desc())
            }
            (CategorySort::IsActive, SortDirection::Asc) => {
                query.order(categories::is_active.asc())
            }
            (CategorySort::IsActive, SortDirection::Desc) => {
                query.order(categories::is_active.desc())
            }
        };

        query.then_order_by(categories::id.asc())
    }

    // Insert or overwrite the row for this snapshot
    async fn upsert(&self, category: Category, operation: &'static str) -> AppResult<Category> {
        let db = Arc::clone(&self.db);
        let model = CategoryModel::from(&category);

        let timer = TimedOperation::new(operation);
        let stored = task::spawn_blocking(move || -> AppResult<CategoryModel> {
            let mut conn = db.get_connection()?;
            let changeset = CategoryChangeset::from(&model);

            let row = diesel::insert_into(categories::table)
                .values(&model)
                .on_conflict(categories::id)
                .do_update()
                .set(&changeset)
                .returning(CategoryModel::as_returning())
                .get_result(&mut conn)?;

            Ok(row)
        })
        .await??;
        LogContext::db_operation(operation, "categories", Some(timer.finish()));

        Ok(Category::from(stored))
    }
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create(&self, category: Category) -> AppResult<Category> {
        self.upsert(category, "insert").await
    }

    async fn update(&self, category: Category) -> AppResult<Category> {
        self.upsert(category, "update").await
    }

    async fn find_by_id(&self, id: CategoryId) -> AppResult<Option<Category>> {
        let db = Arc::clone(&self.db);
        let id = *id.as_uuid();

        let model = task::spawn_blocking(move || -> AppResult<Option<CategoryModel>> {
            let mut conn = db.get_connection()?;
            let m = categories::table
                .filter(categories::id.eq(id))
                .select(CategoryModel::as_select())
                .first(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Category::from))
    }

    async fn delete_by_id(&self, id: CategoryId) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id = *id.as_uuid();

        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(categories::table.filter(categories::id.eq(id)))
                .execute(&mut conn)?;
            Ok(n)
        })
        .await??;

        if deleted == 0 {
            log_debug!("Category {} was not stored, nothing to delete", id);
        }
        LogContext::db_operation("delete", "categories", None);
        Ok(())
    }

    async fn find_all(&self, query: SearchQuery) -> AppResult<Pagination<Category>> {
        let db = Arc::clone(&self.db);
        let (page, per_page) = (query.page, query.per_page);
        let timer = TimedOperation::new("category search");

        let (total, models) = task::spawn_blocking(move || -> AppResult<(i64, Vec<CategoryModel>)> {
            let mut conn = db.get_connection()?;
            let terms = query.terms();

            let total = Self::filtered(terms)
                .count()
                .get_result::<i64>(&mut conn)?;

            let rows = Self::ordered(
                Self::filtered(terms),
                CategorySort::from_field(&query.sort),
                query.direction,
            )
            .offset(query.offset())
            .limit(query.limit())
            .select(CategoryModel::as_select())
            .load(&mut conn)?;

            Ok((total, rows))
        })
        .await??;
        LogContext::db_operation("search", "categories", Some(timer.finish()));

        Ok(Pagination::new(
            page,
            per_page,
            total as u64,
            models.into_iter().map(Category::from).collect(),
        ))
    }
}
