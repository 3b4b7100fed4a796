use serde::Serialize;

use super::{ValidationError, ValidationHandler};
use crate::shared::errors::{AppError, DomainError};

/// Accumulating validation handler.
///
/// Collects every error reported to it so callers get the complete list of
/// problems in one pass. This is the handler use cases validate into, and the
/// value returned to callers when a write is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Wrap a failure as a single-error notification carrying its message.
    pub fn from_error(error: &AppError) -> Self {
        Self::with_error(ValidationError::new(error.message()))
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Error messages in the order they were reported.
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(ValidationError::message).collect()
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate(
        &mut self,
        step: &mut dyn FnMut() -> anyhow::Result<()>,
    ) -> Result<(), DomainError> {
        if let Err(err) = step() {
            match err.downcast::<DomainError>() {
                Ok(domain) => self.errors.extend(domain.into_errors()),
                Err(other) => self.errors.push(ValidationError::new(other.to_string())),
            }
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl From<DomainError> for Notification {
    fn from(err: DomainError) -> Self {
        Self {
            errors: err.into_errors(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_every_appended_error() {
        let mut notification = Notification::create();
        notification.append("first".into()).unwrap();
        notification.append("second".into()).unwrap();

        assert!(notification.has_errors());
        assert_eq!(notification.messages(), vec!["first", "second"]);
        assert_eq!(notification.first_error().unwrap().message(), "first");
    }

    #[test]
    fn empty_notification_has_no_first_error() {
        let notification = Notification::create();
        assert!(!notification.has_errors());
        assert!(notification.first_error().is_none());
    }

    #[test]
    fn append_all_merges_other_handler() {
        let mut other = Notification::create();
        other.append("from other".into()).unwrap();

        let mut notification = Notification::with_error("own".into());
        notification.append_all(&other).unwrap();

        assert_eq!(notification.messages(), vec!["own", "from other"]);
    }

    #[test]
    fn validate_merges_domain_error_payload() {
        let mut notification = Notification::create();
        notification
            .validate(&mut || {
                Err(DomainError::from_errors(vec!["a".into(), "b".into()]).into())
            })
            .unwrap();

        assert_eq!(notification.messages(), vec!["a", "b"]);
    }

    #[test]
    fn validate_wraps_any_other_failure_as_one_error() {
        let mut notification = Notification::create();
        notification
            .validate(&mut || Err(anyhow::anyhow!("unexpected failure")))
            .unwrap();

        assert_eq!(notification.messages(), vec!["unexpected failure"]);
    }

    #[test]
    fn validate_with_passing_step_adds_nothing() {
        let mut notification = Notification::create();
        notification.validate(&mut || Ok(())).unwrap();
        assert!(!notification.has_errors());
    }

    #[test]
    fn from_error_keeps_only_the_failure_message() {
        let err = AppError::InternalError("Gateway error".into());
        let notification = Notification::from_error(&err);
        assert_eq!(notification.messages(), vec!["Gateway error"]);
    }
}
