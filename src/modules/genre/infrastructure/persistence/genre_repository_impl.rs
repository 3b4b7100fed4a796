use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use crate::log_debug;
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::{Genre, GenreId, GenreRepository};
use crate::modules::genre::infrastructure::models::{
    links_for, GenreCategoryModel, GenreChangeset, GenreModel,
};
use crate::modules::genre::infrastructure::sort::GenreSort;
use crate::schema::{genres, genres_categories};
use crate::shared::application::{Pagination, SearchQuery, SortDirection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::shared::Database;

/// Postgres-backed genre storage; category links live in `genres_categories`
pub struct GenreRepositoryImpl {
    db: Arc<Database>,
}

impl GenreRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: category ids per genre, in position order
    fn load_links(
        conn: &mut PgConnection,
        genre_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, Vec<CategoryId>>> {
        let rows: Vec<GenreCategoryModel> = genres_categories::table
            .filter(genres_categories::genre_id.eq_any(genre_ids.to_vec()))
            .order((genres_categories::genre_id, genres_categories::position))
            .select(GenreCategoryModel::as_select())
            .load(conn)?;

        let mut links: HashMap<Uuid, Vec<CategoryId>> = HashMap::new();
        for row in rows {
            links
                .entry(row.genre_id)
                .or_default()
                .push(CategoryId::from_uuid(row.category_id));
        }
        Ok(links)
    }

    fn filtered(terms: Option<&str>) -> genres::BoxedQuery<'static, Pg> {
        let mut query = genres::table.into_boxed();

        if let Some(terms) = terms {
            query = query.filter(genres::name.ilike(format!("%{}%", terms.to_lowercase())));
        }

        query
    }

    fn ordered(
        query: genres::BoxedQuery<'static, Pg>,
        sort: GenreSort,
        direction: SortDirection,
    ) -> genres::BoxedQuery<'static, Pg> {
        let query = match (sort, direction) {
            (GenreSort::Name, SortDirection::Asc) => query.order(genres::name.asc()),
            (GenreSort::Name, SortDirection::Desc) => query.order(genres::name.desc()),
            (GenreSort::CreatedAt, SortDirection::Asc) => query.order(genres::created_at.asc()),
            (GenreSort::CreatedAt, SortDirection::Desc) => query.order(genres::created_at.desc()),
            (GenreSort::UpdatedAt, SortDirection::Asc) => query.order(genres::updated_at.asc()),
            (GenreSort::UpdatedAt, SortDirection::Desc) => query.order(genres::updated_at.desc()),
            (GenreSort::IsActive, SortDirection::Asc) => query.order(genres::is_active.asc()),
            (GenreSort::IsActive, SortDirection::Desc) => query.order(genres::is_active.desc()),
        };

        query.then_order_by(genres::id.asc())
    }

    // Row upsert and link rewrite in one transaction
    async fn upsert(&self, genre: Genre, operation: &'static str) -> AppResult<Genre> {
        let db = Arc::clone(&self.db);
        let model = GenreModel::from(&genre);
        let links = links_for(&genre);
        let categories = genre.categories().to_vec();

        let timer = TimedOperation::new(operation);
        let stored = task::spawn_blocking(move || -> AppResult<GenreModel> {
            let mut conn = db.get_connection()?;

            conn.transaction::<_, AppError, _>(|conn| {
                let changeset = GenreChangeset::from(&model);
                let row = diesel::insert_into(genres::table)
                    .values(&model)
                    .on_conflict(genres::id)
                    .do_update()
                    .set(&changeset)
                    .returning(GenreModel::as_returning())
                    .get_result(conn)?;

                diesel::delete(
                    genres_categories::table.filter(genres_categories::genre_id.eq(model.id)),
                )
                .execute(conn)?;

                if !links.is_empty() {
                    diesel::insert_into(genres_categories::table)
                        .values(&links)
                        .execute(conn)?;
                }

                Ok(row)
            })
        })
        .await??;
        LogContext::db_operation(operation, "genres", Some(timer.finish()));

        Ok(stored.into_genre(categories))
    }
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn create(&self, genre: Genre) -> AppResult<Genre> {
        self.upsert(genre, "insert").await
    }

    async fn update(&self, genre: Genre) -> AppResult<Genre> {
        self.upsert(genre, "update").await
    }

    async fn find_by_id(&self, id: GenreId) -> AppResult<Option<Genre>> {
        let db = Arc::clone(&self.db);
        let id: Uuid = id.into();

        task::spawn_blocking(move || -> AppResult<Option<Genre>> {
            let mut conn = db.get_connection()?;
            let model: Option<GenreModel> = genres::table
                .filter(genres::id.eq(id))
                .select(GenreModel::as_select())
                .first(&mut conn)
                .optional()?;

            let Some(model) = model else {
                return Ok(None);
            };

            let mut links = Self::load_links(&mut conn, &[id])?;
            let categories = links.remove(&id).unwrap_or_default();
            Ok(Some(model.into_genre(categories)))
        })
        .await?
    }

    async fn delete_by_id(&self, id: GenreId) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let id: Uuid = id.into();

        // Links go with the row through ON DELETE CASCADE
        let deleted = task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(genres::table.filter(genres::id.eq(id))).execute(&mut conn)?;
            Ok(n)
        })
        .await??;

        if deleted == 0 {
            log_debug!("Genre {} was not stored, nothing to delete", id);
        }
        LogContext::db_operation("delete", "genres", None);
        Ok(())
    }

    async fn find_all(&self, query: SearchQuery) -> AppResult<Pagination<Genre>> {
        let db = Arc::clone(&self.db);
        let (page, per_page) = (query.page, query.per_page);
        let timer = TimedOperation::new("genre search");

        let (total, items) = task::spawn_blocking(move || -> AppResult<(i64, Vec<Genre>)> {
            let mut conn = db.get_connection()?;
            let terms = query.terms();

            let total = Self::filtered(terms)
                .count()
                .get_result::<i64>(&mut conn)?;

            let rows: Vec<GenreModel> = Self::ordered(
                Self::filtered(terms),
                GenreSort::from_field(&query.sort),
                query.direction,
            )
            .offset(query.offset())
            .limit(query.limit())
            .select(GenreModel::as_select())
            .load(&mut conn)?;

            let ids: Vec<Uuid> = rows.iter().map(|row| row.id).collect();
            let mut links = Self::load_links(&mut conn, &ids)?;

            let items = rows
                .into_iter()
                .map(|row| {
                    let categories = links.remove(&row.id).unwrap_or_default();
                    row.into_genre(categories)
                })
                .collect();

            Ok((total, items))
        })
        .await??;
        LogContext::db_operation("search", "genres", Some(timer.finish()));

        Ok(Pagination::new(page, per_page, total as u64, items))
    }
}
