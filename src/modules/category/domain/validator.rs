use super::entities::category::Category;
use crate::shared::errors::DomainError;
use crate::shared::validation::{check_name_length, ValidationHandler, Validator};

const NAME_MIN_LENGTH: usize = 3;
const NAME_MAX_LENGTH: usize = 255;

/// Field rules for [`Category`]
pub struct CategoryValidator<'a> {
    category: &'a Category,
    handler: &'a mut dyn ValidationHandler,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(category: &'a Category, handler: &'a mut dyn ValidationHandler) -> Self {
        Self { category, handler }
    }
}

impl Validator for CategoryValidator<'_> {
    fn validate(&mut self) -> Result<(), DomainError> {
        check_name_length(
            self.handler,
            self.category.name(),
            NAME_MIN_LENGTH,
            NAME_MAX_LENGTH,
        )
    }
}
