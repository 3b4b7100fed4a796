/// Columns a genre listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreSort {
    Name,
    CreatedAt,
    UpdatedAt,
    IsActive,
}

impl GenreSort {
    /// Resolve a requested sort field; unknown fields order by name.
    pub fn from_field(field: &str) -> Self {
        match field.trim() {
            "createdAt" | "created_at" => GenreSort::CreatedAt,
            "updatedAt" | "updated_at" => GenreSort::UpdatedAt,
            "isActive" | "is_active" | "active" => GenreSort::IsActive,
            _ => GenreSort::Name,
        }
    }
}
