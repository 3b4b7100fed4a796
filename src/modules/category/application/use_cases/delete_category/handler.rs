use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::category::domain::{CategoryId, CategoryRepository};
use crate::shared::application::UseCase;
use crate::shared::errors::AppResult;

use super::command::DeleteCategoryCommand;

/// Use case handler for removing a category
///
/// Deleting an id that is unknown, or not an id at all, succeeds without
/// touching storage beyond the delete call itself.
pub struct DeleteCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryCommand, ()> for DeleteCategoryHandler {
    async fn execute(&self, command: DeleteCategoryCommand) -> AppResult<()> {
        let Ok(id) = command.id.parse::<CategoryId>() else {
            log_debug!("DeleteCategory: ignoring malformed id {:?}", command.id);
            return Ok(());
        };

        log_debug!("DeleteCategory: id={}", id);
        self.category_repository.delete_by_id(id).await
    }
}
