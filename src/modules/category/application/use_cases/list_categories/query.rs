use crate::shared::application::SearchQuery;

/// Listing categories takes the shared search contract as is
pub type ListCategoriesQuery = SearchQuery;
