use super::{ValidationError, ValidationHandler};
use crate::shared::errors::DomainError;

/// Fail-fast validation handler.
///
/// Holds no state: the first reported error aborts the run with a
/// [`DomainError`]. Handy in tests and anywhere "is this valid at all" is
/// the only question.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrowsValidationHandler;

impl ThrowsValidationHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ValidationHandler for ThrowsValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        Err(DomainError::from_error(error))
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        Err(DomainError::from_errors(other.errors().to_vec()))
    }

    fn validate(
        &mut self,
        step: &mut dyn FnMut() -> anyhow::Result<()>,
    ) -> Result<(), DomainError> {
        match step() {
            Ok(()) => Ok(()),
            Err(err) => match err.downcast::<DomainError>() {
                Ok(domain) => Err(domain),
                Err(other) => Err(DomainError::from_error(ValidationError::new(
                    other.to_string(),
                ))),
            },
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::Notification;

    #[test]
    fn append_fails_immediately_with_the_error() {
        let mut handler = ThrowsValidationHandler::new();
        let err = handler.append("'name' cannot be null".into()).unwrap_err();

        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].message(), "'name' cannot be null");
        assert!(handler.errors().is_empty());
        assert!(!handler.has_errors());
    }

    #[test]
    fn append_all_raises_every_error_of_the_other_handler() {
        let mut other = Notification::create();
        other.append("one".into()).unwrap();
        other.append("two".into()).unwrap();

        let err = ThrowsValidationHandler::new()
            .append_all(&other)
            .unwrap_err();
        assert_eq!(err.errors().len(), 2);
    }

    #[test]
    fn validate_wraps_foreign_failures() {
        let err = ThrowsValidationHandler::new()
            .validate(&mut || Err(anyhow::anyhow!("io broke")))
            .unwrap_err();

        assert_eq!(err.errors()[0].message(), "io broke");
    }

    #[test]
    fn validate_passes_through_domain_errors() {
        let err = ThrowsValidationHandler::new()
            .validate(&mut || Err(DomainError::from_error("bad".into()).into()))
            .unwrap_err();

        assert_eq!(err.errors()[0].message(), "bad");
        assert_eq!(err.message(), "One or more errors occurred during validation");
    }
}
