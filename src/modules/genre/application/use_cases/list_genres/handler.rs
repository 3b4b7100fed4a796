use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::genre::domain::GenreRepository;
use crate::shared::application::Query;
use crate::shared::errors::AppResult;

use super::{
    query::ListGenresQuery,
    result::{GenreListOutput, ListGenresResult},
};

/// Query handler for paging through genres
pub struct ListGenresHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl ListGenresHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl Query<ListGenresQuery, ListGenresResult> for ListGenresHandler {
    async fn execute(&self, query: ListGenresQuery) -> AppResult<ListGenresResult> {
        log_debug!("ListGenres: page={} terms={:?}", query.page, query.terms);

        let page = self.genre_repository.find_all(query).await?;
        Ok(page.map(GenreListOutput::from))
    }
}
