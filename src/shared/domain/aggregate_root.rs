use super::Identifier;
use crate::shared::errors::DomainError;
use crate::shared::validation::ValidationHandler;

/// An aggregate is the unit of validation, mutation and persistence.
///
/// Each snapshot validates itself by handing a validator the handler the
/// caller chose; it never decides by itself whether errors accumulate.
pub trait AggregateRoot {
    type Id: Identifier;

    /// Display name used in lookup failures, e.g. `"Category"`.
    const NAME: &'static str;

    fn id(&self) -> Self::Id;

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError>;
}
