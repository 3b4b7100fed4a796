#[derive(Debug, Clone)]
pub struct DeleteCategoryCommand {
    pub id: String,
}

impl DeleteCategoryCommand {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
