use async_trait::async_trait;
use std::{cmp::Ordering, collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::log_debug;
use crate::modules::genre::domain::{Genre, GenreId, GenreRepository};
use crate::modules::genre::infrastructure::sort::GenreSort;
use crate::shared::application::{Pagination, SearchQuery, SortDirection};
use crate::shared::errors::AppResult;

/// Process-local genre storage with the same search rules as Postgres
#[derive(Clone, Default)]
pub struct InMemoryGenreRepository {
    genres: Arc<RwLock<HashMap<GenreId, Genre>>>,
}

impl InMemoryGenreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.genres.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.genres.read().await.is_empty()
    }

    async fn store(&self, genre: Genre) -> Genre {
        self.genres.write().await.insert(genre.id(), genre.clone());
        genre
    }
}

fn compare(a: &Genre, b: &Genre, sort: GenreSort) -> Ordering {
    let primary = match sort {
        GenreSort::Name => a.name().cmp(&b.name()),
        GenreSort::CreatedAt => a.created_at().cmp(&b.created_at()),
        GenreSort::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        GenreSort::IsActive => a.is_active().cmp(&b.is_active()),
    };
    primary.then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl GenreRepository for InMemoryGenreRepository {
    async fn create(&self, genre: Genre) -> AppResult<Genre> {
        Ok(self.store(genre).await)
    }

    async fn update(&self, genre: Genre) -> AppResult<Genre> {
        Ok(self.store(genre).await)
    }

    async fn find_by_id(&self, id: GenreId) -> AppResult<Option<Genre>> {
        Ok(self.genres.read().await.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: GenreId) -> AppResult<()> {
        if self.genres.write().await.remove(&id).is_none() {
            log_debug!("Genre {} was not stored, nothing to delete", id);
        }
        Ok(())
    }

    async fn find_all(&self, query: SearchQuery) -> AppResult<Pagination<Genre>> {
        let terms = query.terms().map(str::to_lowercase);
        let sort = GenreSort::from_field(&query.sort);

        let mut found: Vec<Genre> = {
            let genres = self.genres.read().await;
            genres
                .values()
                .filter(|genre| match terms.as_deref() {
                    Some(terms) => genre
                        .name()
                        .map(|name| name.to_lowercase().contains(terms))
                        .unwrap_or(false),
                    None => true,
                })
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::CategoryId;

    #[tokio::test]
    async fn search_matches_name_only() {
        let repository = InMemoryGenreRepository::new();
        for name in ["Ação", "Aventura", "Drama"] {
            repository
                .create(Genre::new_genre(Some(name.into()), true))
                .await
                .unwrap();
        }

        let page = repository
            .find_all(SearchQuery::new(0, 10, "AV", "name", SortDirection::Asc))
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name(), Some("Aventura"));
    }

    #[tokio::test]
    async fn keeps_category_links_across_updates() {
        let repository = InMemoryGenreRepository::new();
        let category = CategoryId::unique();
        let genre = repository
            .create(Genre::new_genre(Some("Ação".into()), true).add_category(category))
            .await
            .unwrap();

        repository
            .update(genre.clone().remove_category(category))
            .await
            .unwrap();

        let stored = repository.find_by_id(genre.id()).await.unwrap().unwrap();
        assert!(stored.categories().is_empty());
        assert_eq!(repository.len().await, 1);
    }
}
