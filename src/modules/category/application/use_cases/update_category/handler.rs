use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryId, CategoryRepository};
use crate::shared::application::UseCase;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::shared::validation::{Notification, ValidatedResult, ValidationHandler};
use crate::{log_debug, log_warn};

use super::{command::UpdateCategoryCommand, result::UpdateCategoryOutput};

/// Use case handler for updating an existing category
pub struct UpdateCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl UpdateCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }

    async fn load(&self, raw_id: &str) -> AppResult<Category> {
        let not_found = || AppError::not_found(Category::NAME, raw_id);

        let id: CategoryId = raw_id.parse().map_err(|_| not_found())?;
        self.category_repository
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }
}

#[async_trait]
impl UseCase<UpdateCategoryCommand, ValidatedResult<UpdateCategoryOutput>>
    for UpdateCategoryHandler
{
    async fn execute(
        &self,
        command: UpdateCategoryCommand,
    ) -> AppResult<ValidatedResult<UpdateCategoryOutput>> {
        log_debug!("UpdateCategory: id={}", command.id);

        let category = self
            .load(&command.id)
            .await?
            .update(command.name, command.description, command.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification)?;
        if notification.has_errors() {
            LogContext::validation_rejected("UpdateCategory", notification.errors().len());
            return Ok(Err(notification));
        }

        match self.category_repository.update(category).await {
            Ok(updated) => Ok(Ok(UpdateCategoryOutput::from(&updated))),
            Err(err) => {
                log_warn!("UpdateCategory: storage rejected the write: {}", err);
                Ok(Err(Notification::from_error(&err)))
            }
        }
    }
}
