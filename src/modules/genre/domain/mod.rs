pub mod entities;
pub mod repositories;
pub mod validator;

pub use entities::{Genre, GenreId};
pub use repositories::GenreRepository;
pub use validator::GenreValidator;
