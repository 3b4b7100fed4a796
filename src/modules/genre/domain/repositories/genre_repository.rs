use async_trait::async_trait;

use crate::modules::genre::domain::entities::{Genre, GenreId};
use crate::shared::application::{Pagination, SearchQuery};
use crate::shared::errors::AppResult;

/// Storage port for the genre aggregate, category links included
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn create(&self, genre: Genre) -> AppResult<Genre>;

    /// Persist a modified genre, replacing its category links
    async fn update(&self, genre: Genre) -> AppResult<Genre>;

    async fn find_by_id(&self, id: GenreId) -> AppResult<Option<Genre>>;

    /// Remove a genre and its links; unknown ids are ignored
    async fn delete_by_id(&self, id: GenreId) -> AppResult<()>;

    /// Page through genres whose name matches the query terms
    async fn find_all(&self, query: SearchQuery) -> AppResult<Pagination<Genre>>;
}
