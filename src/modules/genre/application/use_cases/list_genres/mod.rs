mod handler;
mod query;
mod result;

pub use handler::ListGenresHandler;
pub use query::ListGenresQuery;
pub use result::{GenreListOutput, ListGenresResult};
