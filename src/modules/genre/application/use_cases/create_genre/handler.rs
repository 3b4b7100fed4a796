use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::category_ids::parse_category_ids;
use crate::modules::genre::domain::{Genre, GenreRepository};
use crate::shared::application::UseCase;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::shared::validation::{Notification, ValidatedResult, ValidationHandler};
use crate::{log_debug, log_warn};

use super::{command::CreateGenreCommand, result::CreateGenreOutput};

/// Use case handler for creating a new genre
pub struct CreateGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl CreateGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl UseCase<CreateGenreCommand, ValidatedResult<CreateGenreOutput>> for CreateGenreHandler {
    async fn execute(
        &self,
        command: CreateGenreCommand,
    ) -> AppResult<ValidatedResult<CreateGenreOutput>> {
        log_debug!(
            "CreateGenre: name={:?} categories={}",
            command.name,
            command.categories.len()
        );

        let mut notification = Notification::create();
        let mut category_errors = Notification::create();
        let categories = parse_category_ids(&command.categories, &mut category_errors)?;

        let genre = Genre::new_genre_with_categories(command.name, command.is_active, categories);
        genre.validate(&mut notification)?;
        notification.append_all(&category_errors)?;

        if notification.has_errors() {
            LogContext::validation_rejected("CreateGenre", notification.errors().len());
            return Ok(Err(notification));
        }

        match self.genre_repository.create(genre).await {
            Ok(created) => Ok(Ok(CreateGenreOutput::from(&created))),
            Err(err) => {
                log_warn!("CreateGenre: storage rejected the write: {}", err);
                Ok(Err(Notification::from_error(&err)))
            }
        }
    }
}
