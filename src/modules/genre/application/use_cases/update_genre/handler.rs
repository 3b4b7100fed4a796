use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::category_ids::parse_category_ids;
use crate::modules::genre::domain::{Genre, GenreId, GenreRepository};
use crate::shared::application::UseCase;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::shared::validation::{Notification, ValidatedResult, ValidationHandler};
use crate::{log_debug, log_warn};

use super::{command::UpdateGenreCommand, result::UpdateGenreOutput};

/// Use case handler for updating an existing genre
pub struct UpdateGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl UpdateGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }

    async fn load(&self, raw_id: &str) -> AppResult<Genre> {
        let not_found = || AppError::not_found(Genre::NAME, raw_id);

        let id: GenreId = raw_id.parse().map_err(|_| not_found())?;
        self.genre_repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }
}

#[async_trait]
impl UseCase<UpdateGenreCommand, ValidatedResult<UpdateGenreOutput>> for UpdateGenreHandler {
    async fn execute(
        &self,
        command: UpdateGenreCommand,
    ) -> AppResult<ValidatedResult<UpdateGenreOutput>> {
        log_debug!("UpdateGenre: id={}", command.id);

        let current = self.load(&command.id).await?;

        let mut category_errors = Notification::create();
        let categories = parse_category_ids(&command.categories, &mut category_errors)?;
        let genre = current.update(command.name, command.is_active, categories);

        let mut notification = Notification::create();
        genre.validate(&mut notification)?;
        notification.append_all(&category_errors)?;

        if notification.has_errors() {
            LogContext::validation_rejected("UpdateGenre", notification.errors().len());
            return Ok(Err(notification));
        }

        match self.genre_repository.update(genre).await {
            Ok(updated) => Ok(Ok(UpdateGenreOutput::from(&updated))),
            Err(err) => {
                log_warn!("UpdateGenre: storage rejected the write: {}", err);
                Ok(Err(Notification::from_error(&err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::CategoryId;
    use crate::modules::genre::domain::repositories::MockGenreRepository;

    #[tokio::test]
    async fn replaces_categories_and_deactivates() {
        let kept = CategoryId::unique();
        let existing = Genre::new_genre(Some("Ação".into()), true).add_category(CategoryId::unique());
        let id = existing.id();

        let mut repository = MockGenreRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository
            .expect_update()
            .withf(move |genre| {
                genre.id() == id
                    && genre.name() == Some("Aventura")
                    && genre.categories() == [kept]
                    && genre.deleted_at().is_some()
            })
            .times(1)
            .returning(Ok);

        let output = UpdateGenreHandler::new(Arc::new(repository))
            .execute(UpdateGenreCommand::new(
                id.to_string(),
                Some("Aventura".into()),
                false,
                vec![kept.to_string()],
            ))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(output.id, id);
    }

    #[tokio::test]
    async fn unknown_genre_is_not_found() {
        let mut repository = MockGenreRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().never();

        let id = GenreId::unique();
        let err = UpdateGenreHandler::new(Arc::new(repository))
            .execute(UpdateGenreCommand::new(id.to_string(), Some("Ação".into()), true, vec![]))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), format!("Genre with id {} not found", id));
    }

    #[tokio::test]
    async fn invalid_name_is_reported_without_storing() {
        let existing = Genre::new_genre(Some("Ação".into()), true);
        let id = existing.id();

        let mut repository = MockGenreRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().never();

        let notification = UpdateGenreHandler::new(Arc::new(repository))
            .execute(UpdateGenreCommand::new(id.to_string(), None, true, vec![]))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(notification.messages(), vec!["'name' cannot be null"]);
    }

    #[tokio::test]
    async fn name_errors_come_before_category_errors() {
        let existing = Genre::new_genre(Some("Ação".into()), true);
        let id = existing.id();

        let mut repository = MockGenreRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_update().never();

        let notification = UpdateGenreHandler::new(Arc::new(repository))
            .execute(UpdateGenreCommand::new(
                id.to_string(),
                Some(String::new()),
                true,
                vec!["not-an-id".into()],
            ))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(
            notification.messages(),
            vec![
                "'name' cannot be empty",
                "'categories' contains an invalid id: not-an-id"
            ]
        );
    }
}
