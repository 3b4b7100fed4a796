use chrono::{DateTime, Utc};

use crate::define_identifier;
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::validator::GenreValidator;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::DomainError;
use crate::shared::validation::{ValidationHandler, Validator};

define_identifier!(
    /// Identity of a [`Genre`]
    GenreId
);

/// Genre aggregate root
///
/// Holds an ordered set of category ids: insertion order is kept and an id
/// appears at most once.
#[derive(Debug, Clone)]
pub struct Genre {
    id: GenreId,
    name: Option<String>,
    is_active: bool,
    categories: Vec<CategoryId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

fn deduplicated(ids: impl IntoIterator<Item = CategoryId>) -> Vec<CategoryId> {
    let mut unique = Vec::new();
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl Genre {
    /// Create a brand new genre with no categories.
    pub fn new_genre(name: Option<String>, is_active: bool) -> Self {
        Self::new_genre_with_categories(name, is_active, Vec::new())
    }

    /// Create a brand new genre already linked to `categories`.
    pub fn new_genre_with_categories(
        name: Option<String>,
        is_active: bool,
        categories: Vec<CategoryId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GenreId::unique(),
            name,
            is_active,
            categories: deduplicated(categories),
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    pub fn with(
        id: GenreId,
        name: Option<String>,
        is_active: bool,
        categories: Vec<CategoryId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            is_active,
            categories: deduplicated(categories),
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn activate(self) -> Self {
        Self {
            is_active: true,
            updated_at: Utc::now(),
            deleted_at: None,
            ..self
        }
    }

    pub fn deactivate(self) -> Self {
        let now = Utc::now();
        Self {
            is_active: false,
            updated_at: now,
            deleted_at: self.deleted_at.or(Some(now)),
            ..self
        }
    }

    /// Replace name, status and the whole category list.
    pub fn update(self, name: Option<String>, is_active: bool, categories: Vec<CategoryId>) -> Self {
        let now = Utc::now();
        let deleted_at = if is_active {
            None
        } else {
            self.deleted_at.or(Some(now))
        };

        Self {
            name,
            is_active,
            categories: deduplicated(categories),
            updated_at: now,
            deleted_at,
            ..self
        }
    }

    pub fn add_category(mut self, id: CategoryId) -> Self {
        if !self.categories.contains(&id) {
            self.categories.push(id);
        }
        self.updated_at = Utc::now();
        self
    }

    pub fn add_categories(self, ids: Vec<CategoryId>) -> Self {
        if ids.is_empty() {
            return self;
        }
        ids.into_iter().fold(self, Genre::add_category)
    }

    pub fn remove_category(mut self, id: CategoryId) -> Self {
        self.categories.retain(|existing| *existing != id);
        self.updated_at = Utc::now();
        self
    }

    pub fn id(&self) -> GenreId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;

    const NAME: &'static str = "Genre";

    fn id(&self) -> GenreId {
        self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        GenreValidator::new(self, handler).validate()
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Genre {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::ThrowsValidationHandler;

    fn genre(name: &str, is_active: bool) -> Genre {
        Genre::new_genre(Some(name.to_string()), is_active)
    }

    fn single_error(genre: &Genre) -> String {
        let err = genre
            .validate(&mut ThrowsValidationHandler::new())
            .unwrap_err();
        assert_eq!(err.errors().len(), 1);
        err.errors()[0].message().to_string()
    }

    #[test]
    fn new_genre_starts_without_categories() {
        let genre = genre("ação", true);

        assert_eq!(genre.name(), Some("ação"));
        assert!(genre.is_active());
        assert!(genre.categories().is_empty());
        assert_eq!(genre.created_at(), genre.updated_at());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn new_genre_with_categories_keeps_creation_timestamps_equal() {
        let a = CategoryId::unique();
        let b = CategoryId::unique();

        let genre = Genre::new_genre_with_categories(Some("ação".into()), true, vec![a, b, a]);

        assert_eq!(genre.categories(), &[a, b]);
        assert_eq!(genre.created_at(), genre.updated_at());
    }

    #[test]
    fn inactive_new_genre_records_deletion_time() {
        let genre = genre("ação", false);
        assert_eq!(genre.deleted_at(), Some(genre.created_at()));
    }

    #[test]
    fn name_rules_allow_a_single_character() {
        assert!(genre("a", true)
            .validate(&mut ThrowsValidationHandler::new())
            .is_ok());
    }

    #[test]
    fn invalid_names_report_one_error_each() {
        assert_eq!(
            single_error(&Genre::new_genre(None, true)),
            "'name' cannot be null"
        );
        assert_eq!(single_error(&genre(" ", true)), "'name' cannot be empty");
        assert_eq!(
            single_error(&genre(&"a".repeat(256), true)),
            "'name' must be between 1 and 255 characters"
        );
    }

    #[test]
    fn deactivate_twice_keeps_first_deletion_time() {
        let first = genre("ação", true).deactivate();
        let recorded = first.deleted_at();

        let second = first.deactivate();
        assert!(recorded.is_some());
        assert_eq!(second.deleted_at(), recorded);
    }

    #[test]
    fn activate_clears_deletion_time() {
        let genre = genre("ação", false).activate();
        assert!(genre.is_active());
        assert!(genre.deleted_at().is_none());
    }

    #[test]
    fn add_category_ignores_duplicates_and_keeps_order() {
        let first = CategoryId::unique();
        let second = CategoryId::unique();

        let genre = genre("ação", true)
            .add_category(first)
            .add_category(second)
            .add_category(first);

        assert_eq!(genre.categories(), &[first, second]);
    }

    #[test]
    fn add_categories_with_empty_list_changes_nothing() {
        let genre = genre("ação", true);
        let updated_at = genre.updated_at();

        let same = genre.add_categories(Vec::new());
        assert!(same.categories().is_empty());
        assert_eq!(same.updated_at(), updated_at);
    }

    #[test]
    fn add_categories_appends_unique_ids() {
        let a = CategoryId::unique();
        let b = CategoryId::unique();

        let genre = genre("ação", true).add_categories(vec![a, b, a]);
        assert_eq!(genre.categories(), &[a, b]);
    }

    #[test]
    fn remove_category_drops_only_that_id() {
        let a = CategoryId::unique();
        let b = CategoryId::unique();

        let genre = genre("ação", true)
            .add_categories(vec![a, b])
            .remove_category(a)
            .remove_category(CategoryId::unique());

        assert_eq!(genre.categories(), &[b]);
    }

    #[test]
    fn update_replaces_categories_and_applies_deletion_rule() {
        let a = CategoryId::unique();
        let b = CategoryId::unique();
        let genre = genre("ação", true).add_category(a);
        let created_at = genre.created_at();

        let updated = genre.update(Some("aventura".into()), false, vec![b, b]);

        assert_eq!(updated.name(), Some("aventura"));
        assert_eq!(updated.categories(), &[b]);
        assert!(!updated.is_active());
        assert!(updated.deleted_at().is_some());
        assert_eq!(updated.created_at(), created_at);
    }
}
