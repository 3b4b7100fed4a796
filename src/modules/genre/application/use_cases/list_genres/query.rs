use crate::shared::application::SearchQuery;

pub type ListGenresQuery = SearchQuery;
