// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns (use cases, pagination)
pub mod domain; // Shared domain concepts (identifiers, aggregate contract)
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database, configuration)
pub mod utils; // Shared utilities (logging)
pub mod validation; // Validation handlers and validators

// Re-exports for convenience
pub use infrastructure::database::Database;
pub use infrastructure::DatabaseConfig;
