mod handler;
mod query;
mod result;

pub use handler::GetGenreHandler;
pub use query::GetGenreQuery;
pub use result::GenreOutput;
