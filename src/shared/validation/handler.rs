use super::ValidationError;
use crate::shared::errors::DomainError;

/// Strategy deciding what happens when a rule reports an error.
///
/// Validators only ever call `append`; whether that records the error or
/// aborts the run is up to the implementation:
/// - [`Notification`](super::Notification) keeps every error and never fails
/// - [`ThrowsValidationHandler`](super::ThrowsValidationHandler) fails on the first one
pub trait ValidationHandler {
    /// Report a single error.
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Report every error collected by another handler.
    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError>;

    /// Run a validation step and collect whatever it fails with.
    ///
    /// A step failing with a [`DomainError`] contributes its errors; any other
    /// failure contributes its message as a single error.
    fn validate(
        &mut self,
        step: &mut dyn FnMut() -> anyhow::Result<()>,
    ) -> Result<(), DomainError>;

    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}
