use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryRepository};
use crate::shared::application::UseCase;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::AppResult;
use crate::shared::utils::LogContext;
use crate::shared::validation::{Notification, ValidatedResult, ValidationHandler};
use crate::{log_debug, log_warn};

use super::{command::CreateCategoryCommand, result::CreateCategoryOutput};

/// Use case handler for creating a new category
pub struct CreateCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl CreateCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<CreateCategoryCommand, ValidatedResult<CreateCategoryOutput>>
    for CreateCategoryHandler
{
    async fn execute(
        &self,
        command: CreateCategoryCommand,
    ) -> AppResult<ValidatedResult<CreateCategoryOutput>> {
        log_debug!("CreateCategory: name={:?}", command.name);

        let category =
            Category::new_category(command.name, command.description, command.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification)?;
        if notification.has_errors() {
            LogContext::validation_rejected("CreateCategory", notification.errors().len());
            return Ok(Err(notification));
        }

        match self.category_repository.create(category).await {
            Ok(created) => Ok(Ok(CreateCategoryOutput::from(&created))),
            Err(err) => {
                log_warn!("CreateCategory: storage rejected the write: {}", err);
                Ok(Err(Notification::from_error(&err)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::repositories::MockCategoryRepository;
    use crate::shared::errors::AppError;

    fn handler(repository: MockCategoryRepository) -> CreateCategoryHandler {
        CreateCategoryHandler::new(Arc::new(repository))
    }

    fn command(name: Option<&str>, is_active: bool) -> CreateCategoryCommand {
        CreateCategoryCommand::new(
            name.map(str::to_string),
            Some("A categoria mais assistida".to_string()),
            is_active,
        )
    }

    #[tokio::test]
    async fn valid_command_is_stored_and_returns_its_id() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_create()
            .withf(|category| {
                category.name() == Some("Filmes")
                    && category.description() == Some("A categoria mais assistida")
                    && category.is_active()
                    && category.deleted_at().is_none()
            })
            .times(1)
            .returning(Ok);

        let output = handler(repository)
            .execute(command(Some("Filmes"), true))
            .await
            .unwrap()
            .unwrap();

        assert!(!output.id.to_string().is_empty());
    }

    #[tokio::test]
    async fn inactive_category_is_stored_with_deletion_time() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_create()
            .withf(|category| !category.is_active() && category.deleted_at().is_some())
            .times(1)
            .returning(Ok);

        let result = handler(repository)
            .execute(command(Some("Filmes"), false))
            .await
            .unwrap();

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn invalid_name_returns_notification_without_storing() {
        let mut repository = MockCategoryRepository::new();
        repository.expect_create().never();

        let notification = handler(repository)
            .execute(command(None, true))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(notification.messages(), vec!["'name' cannot be null"]);
    }

    #[tokio::test]
    async fn storage_failure_becomes_single_error_notification() {
        let mut repository = MockCategoryRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::InternalError("Gateway error".to_string())));

        let notification = handler(repository)
            .execute(command(Some("Filmes"), true))
            .await
            .unwrap()
            .unwrap_err();

        assert_eq!(notification.messages(), vec!["Gateway error"]);
    }
}
