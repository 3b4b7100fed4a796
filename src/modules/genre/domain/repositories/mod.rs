pub mod genre_repository;

pub use genre_repository::GenreRepository;
#[cfg(test)]
pub use genre_repository::MockGenreRepository;
