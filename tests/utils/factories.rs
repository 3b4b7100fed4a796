/// Test data factories with sensible defaults
use catalog_admin::modules::category::{Category, CreateCategoryCommand};
use catalog_admin::modules::genre::{CreateGenreCommand, Genre};
use rand::distributions::Alphanumeric;
use rand::Rng;

pub fn random_name(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

pub struct CategoryFactory {
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
}

impl Default for CategoryFactory {
    fn default() -> Self {
        Self {
            name: Some("Filmes".to_string()),
            description: Some("A categoria mais assistida".to_string()),
            is_active: true,
        }
    }
}

impl CategoryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    pub fn build(self) -> Category {
        Category::new_category(self.name, self.description, self.is_active)
    }

    pub fn command(self) -> CreateCategoryCommand {
        CreateCategoryCommand::new(self.name, self.description, self.is_active)
    }
}

pub fn genre(name: &str) -> Genre {
    Genre::new_genre(Some(name.to_string()), true)
}

pub fn genre_command(name: &str, categories: &[String]) -> CreateGenreCommand {
    CreateGenreCommand::new(Some(name.to_string()), true, categories.to_vec())
}
