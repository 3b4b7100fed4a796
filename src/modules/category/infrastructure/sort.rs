/// Columns a category listing may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySort {
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
    IsActive,
}

impl CategorySort {
    /// Resolve a requested sort field; unknown fields order by name.
    pub fn from_field(field: &str) -> Self {
        match field.trim() {
            "description" => CategorySort::Description,
            "createdAt" | "created_at" => CategorySort::CreatedAt,
            "updatedAt" | "updated_at" => CategorySort::UpdatedAt,
            "isActive" | "is_active" | "active" => CategorySort::IsActive,
            _ => CategorySort::Name,
        }
    }
}
