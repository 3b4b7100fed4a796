pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::use_cases::*;
pub use domain::{Genre, GenreId, GenreRepository};
pub use infrastructure::{GenreRepositoryImpl, InMemoryGenreRepository};
