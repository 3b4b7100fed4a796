/// Command for replacing name, status and categories of a genre
#[derive(Debug, Clone)]
pub struct UpdateGenreCommand {
    pub id: String,
    pub name: Option<String>,
    pub is_active: bool,
    pub categories: Vec<String>,
}

impl UpdateGenreCommand {
    pub fn new(
        id: impl Into<String>,
        name: Option<String>,
        is_active: bool,
        categories: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            is_active,
            categories,
        }
    }
}
