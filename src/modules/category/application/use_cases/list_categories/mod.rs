mod handler;
mod query;
mod result;

pub use handler::ListCategoriesHandler;
pub use query::ListCategoriesQuery;
pub use result::{CategoryListOutput, ListCategoriesResult};
