/// Validation framework shared by every aggregate.
///
/// Rules report problems through a [`ValidationHandler`]; the handler picked
/// by the caller decides whether errors are accumulated ([`Notification`])
/// or raised on first sight ([`ThrowsValidationHandler`]).
pub mod error;
pub mod handler;
pub mod notification;
pub mod throws_handler;
pub mod validator;

pub use error::ValidationError;
pub use handler::ValidationHandler;
pub use notification::Notification;
pub use throws_handler::ThrowsValidationHandler;
pub use validator::{check_name_length, Validator};

/// Outcome of a write use case: the output, or everything that was wrong
/// with the request.
pub type ValidatedResult<T> = Result<T, Notification>;
