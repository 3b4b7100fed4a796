mod handler;
mod query;
mod result;

pub use handler::GetCategoryHandler;
pub use query::GetCategoryQuery;
pub use result::CategoryOutput;
