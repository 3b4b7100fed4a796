/// Command for creating a new genre
#[derive(Debug, Clone)]
pub struct CreateGenreCommand {
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl CreateGenreCommand {
    pub fn new(name: Option<String>, is_active: bool, categories: Vec<String>) -> Self {
        Self {
            name,
            is_active,
            categories,
        }
    }
}
