pub mod create_category;
pub mod delete_category;
pub mod get_category;
pub mod list_categories;
pub mod update_category;

pub use create_category::{CreateCategoryCommand, CreateCategoryHandler, CreateCategoryOutput};
pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler};
pub use get_category::{CategoryOutput, GetCategoryHandler, GetCategoryQuery};
pub use list_categories::{
    CategoryListOutput, ListCategoriesHandler, ListCategoriesQuery, ListCategoriesResult,
};
pub use update_category::{UpdateCategoryCommand, UpdateCategoryHandler, UpdateCategoryOutput};
