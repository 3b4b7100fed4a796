use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::genre::domain::{GenreId, GenreRepository};
use crate::shared::application::UseCase;
use crate::shared::errors::AppResult;

use super::command::DeleteGenreCommand;

/// Use case handler for removing a genre; malformed ids are ignored
pub struct DeleteGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl DeleteGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl UseCase<DeleteGenreCommand, ()> for DeleteGenreHandler {
    async fn execute(&self, command: DeleteGenreCommand) -> AppResult<()> {
        let Ok(id) = command.id.parse::<GenreId>() else {
            log_debug!("DeleteGenre: ignoring malformed id {:?}", command.id);
            return Ok(());
        };

        self.genre_repository.delete_by_id(id).await
    }
}
