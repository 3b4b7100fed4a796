use crate::shared::errors::AppResult;
/// Base traits for all use cases following the CQRS split
///
/// Write handlers implement [`UseCase`] and usually return a
/// [`ValidatedResult`](crate::shared::validation::ValidatedResult): the outer
/// `AppResult` carries faults (not found, storage failure on reads), the
/// inner result carries validation outcomes.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl UseCase<CreateCategoryCommand, ValidatedResult<CreateCategoryOutput>>
///     for CreateCategoryHandler
/// {
///     async fn execute(
///         &self,
///         command: CreateCategoryCommand,
///     ) -> AppResult<ValidatedResult<CreateCategoryOutput>> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
