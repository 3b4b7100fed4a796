/// Query for a single category by its string id
#[derive(Debug, Clone)]
pub struct GetCategoryQuery {
    pub id: String,
}

impl GetCategoryQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
