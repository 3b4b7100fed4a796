pub mod category_repository_impl;

pub use category_repository_impl::CategoryRepositoryImpl;
