use chrono::{DateTime, Utc};

use crate::define_identifier;
use crate::modules::category::domain::validator::CategoryValidator;
use crate::shared::domain::AggregateRoot;
use crate::shared::errors::DomainError;
use crate::shared::validation::{ValidationHandler, Validator};

define_identifier!(
    /// Identity of a [`Category`]
    CategoryId
);

/// Category aggregate root
///
/// Every snapshot is immutable: lifecycle operations consume the current
/// value and return the next one.
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: Option<String>,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// Create a brand new category with a fresh identity.
    pub fn new_category(
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::unique(),
            name,
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: if is_active { None } else { Some(now) },
        }
    }

    /// Rebuild a snapshot from stored state (no invariants are re-applied).
    pub fn with(
        id: CategoryId,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            is_active,
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

    /// Deactivate, keeping the first recorded deletion time if there is one.
    pub fn deactivate(self) -> Self {
        let now = Utc::now();
        Self {
            is_active: false,
            updated_at: now,
            deleted_at: self.deleted_at.or(Some(now)),
            ..self
        }
    }

    pub fn update(
        self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        let deleted_at = if is_active {
            None
        } else {
            self.deleted_at.or(Some(now))
        };

        Self {
            name,
            description,
            is_active,
            updated_at: now,
            deleted_at,
            ..self
        }
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
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

impl AggregateRoot for Category {
    type Id = CategoryId;

    const NAME: &'static str = "Category";

    fn id(&self) -> CategoryId {
        self.id
    }

    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), DomainError> {
        CategoryValidator::new(self, handler).validate()
    }
}

// Aggregates are equal when they share an identity.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}
