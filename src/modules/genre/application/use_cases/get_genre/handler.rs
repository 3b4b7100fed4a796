use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::genre::domain::{Genre, GenreId, GenreRepository};
use crate::shared::application::Query;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::{AppError, AppResult};

use super::{query::GetGenreQuery, result::GenreOutput};

/// Query handler for loading one genre
pub struct GetGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl GetGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl Query<GetGenreQuery, GenreOutput> for GetGenreHandler {
    async fn execute(&self, query: GetGenreQuery) -> AppResult<GenreOutput> {
        log_debug!("GetGenre: id={}", query.id);

        let not_found = || AppError::not_found(Genre::NAME, query.id.as_str());

        let id: GenreId = query.id.parse().map_err(|_| not_found())?;
        self.genre_repository
            .find_by_id(id)
            .await?
            .map(GenreOutput::from)
            .ok_or_else(not_found)
    }
}
