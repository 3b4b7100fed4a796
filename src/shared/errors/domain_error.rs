use thiserror::Error;

use crate::shared::validation::ValidationError;

/// Structured validation failure raised by the fail-fast handler.
///
/// Carries every error that triggered it so an accumulating handler can
/// merge them back in when it catches one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    errors: Vec<ValidationError>,
}

impl DomainError {
    const DEFAULT_MESSAGE: &'static str = "One or more errors occurred during validation";

    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            message: Self::DEFAULT_MESSAGE.to_string(),
            errors,
        }
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self::from_errors(vec![error])
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
