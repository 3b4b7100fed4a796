pub mod create_genre;
pub mod delete_genre;
pub mod get_genre;
pub mod list_genres;
pub mod update_genre;

pub use create_genre::{CreateGenreCommand, CreateGenreHandler, CreateGenreOutput};
pub use delete_genre::{DeleteGenreCommand, DeleteGenreHandler};
pub use get_genre::{GenreOutput, GetGenreHandler, GetGenreQuery};
pub use list_genres::{GenreListOutput, ListGenresHandler, ListGenresQuery, ListGenresResult};
pub use update_genre::{UpdateGenreCommand, UpdateGenreHandler, UpdateGenreOutput};
