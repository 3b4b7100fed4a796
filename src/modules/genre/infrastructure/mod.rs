pub mod in_memory;
pub mod models;
pub mod persistence;
pub mod sort;

pub use in_memory::InMemoryGenreRepository;
pub use persistence::GenreRepositoryImpl;
