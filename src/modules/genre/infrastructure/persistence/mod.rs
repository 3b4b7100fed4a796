pub mod genre_repository_impl;

pub use genre_repository_impl::GenreRepositoryImpl;
