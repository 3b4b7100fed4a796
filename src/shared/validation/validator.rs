use super::{ValidationError, ValidationHandler};
use crate::shared::errors::DomainError;

/// Rule-set for one aggregate, bound to the aggregate and a handler at
/// construction time.
pub trait Validator {
    fn validate(&mut self) -> Result<(), DomainError>;
}

/// Shared name rule: present, not blank, and within `min..=max` characters
/// once trimmed. Reports at most one error.
pub fn check_name_length(
    handler: &mut dyn ValidationHandler,
    name: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), DomainError> {
    let Some(name) = name else {
        return handler.append(ValidationError::new("'name' cannot be null"));
    };

    let trimmed = name.trim();
    if trimmed.is_empty() {
        return handler.append(ValidationError::new("'name' cannot be empty"));
    }

    let length = trimmed.chars().count();
    if length < min || length > max {
        return handler.append(ValidationError::new(format!(
            "'name' must be between {} and {} characters",
            min, max
        )));
    }

    Ok(())
}
