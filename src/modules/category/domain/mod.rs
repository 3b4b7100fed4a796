pub mod entities;
pub mod repositories;
pub mod validator;

pub use entities::{Category, CategoryId};
pub use repositories::CategoryRepository;
pub use validator::CategoryValidator;
